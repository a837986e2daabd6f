use crate::error::{Result, TaskError};
use crate::store::{LoadOutcome, TaskStore};
use std::fs;
use std::path::{Path, PathBuf};

/// Handle the add command
pub fn handle_add(file: &Path, title: &str) -> Result<()> {
    let mut store = open_store(file)?;

    store.add(title);
    store.save_to(file)?;

    println!("Added task #{}: {}", store.len(), title);
    Ok(())
}

/// Handle the list command
pub fn handle_list(file: &Path) -> Result<()> {
    let store = open_store(file)?;

    if store.is_empty() {
        println!("No tasks found.");
        return Ok(());
    }

    for (position, task) in store.enumerate() {
        println!("{position}. [{}] {}", task.icon(), task.title);
    }

    Ok(())
}

/// Handle the done command
pub fn handle_done(file: &Path, position: usize) -> Result<()> {
    let mut store = open_store(file)?;

    store.mark_completed(position)?;
    store.save_to(file)?;

    println!("Marked task #{position} as completed");
    Ok(())
}

/// Handle the delete command
pub fn handle_delete(file: &Path, position: usize) -> Result<()> {
    let mut store = open_store(file)?;

    let task = store.delete(position)?;
    store.save_to(file)?;

    println!("Deleted task #{position}: {}", task.title);
    Ok(())
}

/// Handle the merge command
pub fn handle_merge(file: &Path, source: &Path) -> Result<()> {
    let mut store = TaskStore::new();
    if store.load_from(source)? == LoadOutcome::SourceNotFound {
        return Err(TaskError::io(
            source,
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        ));
    }

    let total = store.merge_and_save_to(file)?;

    println!(
        "Merged {} task(s) into {} ({total} total)",
        store.len(),
        file.display()
    );
    Ok(())
}

/// Handle the lists command
pub fn handle_lists(dir: &Path) -> Result<()> {
    let files = list_files(dir)?;

    if files.is_empty() {
        println!("No task lists found in {}", dir.display());
        return Ok(());
    }

    for path in files {
        if let Some(name) = path.file_name() {
            println!("{}", name.to_string_lossy());
        }
    }

    Ok(())
}

/// `.json` files directly inside `dir`, sorted by name
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| TaskError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| TaskError::io(dir, e))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();

    Ok(files)
}

/// Load the active list, telling the user when it starts out empty
fn open_store(file: &Path) -> Result<TaskStore> {
    let mut store = TaskStore::new();
    if store.load_from(file)? == LoadOutcome::SourceNotFound {
        eprintln!(
            "File '{}' not found. Starting with an empty to-do list.",
            file.display()
        );
    }
    Ok(store)
}
