//! JSON file codec for task lists.
//!
//! A list is stored as an array of `{ "title": ..., "completed": ... }`
//! objects in task order.

use crate::error::{Result, TaskError};
use crate::models::{Task, TaskRecord};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

/// Read the tasks stored at `path`.
///
/// Returns `Ok(None)` when the file does not exist. Any record without a
/// title fails the whole read with [`TaskError::MalformedRecord`].
pub fn read_tasks(path: &Path) -> Result<Option<Vec<Task>>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(TaskError::io(path, e)),
    };

    let records: Vec<TaskRecord> =
        serde_json::from_str(&content).map_err(|e| TaskError::parse(path, e))?;

    let tasks = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| record.into_task(index))
        .collect::<Result<Vec<_>>>()?;

    debug!(path = %path.display(), count = tasks.len(), "read task file");
    Ok(Some(tasks))
}

/// Overwrite `path` with `tasks`. The parent directory must already exist.
///
/// The list is encoded in full before the file is opened, but the write
/// itself is not atomic: if it fails partway the previous content is lost.
pub fn write_tasks(path: &Path, tasks: &[Task]) -> Result<()> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    tasks.serialize(&mut ser).map_err(|e| TaskError::parse(path, e))?;
    buf.push(b'\n');

    let mut file = File::create(path).map_err(|e| TaskError::io(path, e))?;
    file.write_all(&buf)
        .and_then(|()| file.flush())
        .map_err(|e| TaskError::io(path, e))?;

    debug!(path = %path.display(), count = tasks.len(), "wrote task file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = read_tasks(&temp.path().join("absent.json")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_write_format() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.json");
        write_tasks(&path, &[Task::new("Task to save")]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "[\n    {\n        \"title\": \"Task to save\",\n        \"completed\": false\n    }\n]\n"
        );
    }

    #[test]
    fn test_write_empty_list() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.json");
        write_tasks(&path, &[]).unwrap();
        assert_eq!(read_tasks(&path).unwrap(), Some(Vec::new()));
    }

    #[test]
    fn test_write_missing_parent_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("no/such/dir/tasks.json");
        let err = write_tasks(&path, &[Task::new("x")]).unwrap_err();
        assert!(matches!(err, TaskError::Io { .. }));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_write_large_list_to_full_device() {
        let tasks: Vec<Task> = (0..2000).map(|i| Task::new(format!("task {i}"))).collect();
        let err = write_tasks(Path::new("/dev/full"), &tasks).unwrap_err();
        assert!(matches!(err, TaskError::Io { .. }), "got {err}");
    }

    #[test]
    fn test_read_corrupt_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.json");
        fs::write(&path, "[{\"title\": ").unwrap();
        assert!(matches!(read_tasks(&path), Err(TaskError::Parse { .. })));
    }

    #[test]
    fn test_read_wrong_shape() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.json");
        fs::write(&path, r#"{"title": "not an array"}"#).unwrap();
        assert!(matches!(read_tasks(&path), Err(TaskError::Parse { .. })));
    }

    #[test]
    fn test_read_rejects_missing_title() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.json");
        fs::write(&path, r#"[{"title":"ok"},{"completed":true}]"#).unwrap();
        assert!(matches!(
            read_tasks(&path),
            Err(TaskError::MalformedRecord { index: 1 })
        ));
    }

    #[test]
    fn test_read_directory_is_io_failure() {
        let temp = TempDir::new().unwrap();
        let err = read_tasks(temp.path()).unwrap_err();
        assert!(matches!(err, TaskError::Io { .. }));
    }
}
