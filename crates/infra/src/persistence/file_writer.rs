// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// 一時ファイルに書いてから rename する。途中で落ちても中途半端なレポートは残らない。
    pub fn atomic_write<P: AsRef<Path>>(path: P, data: &[u8]) -> std::io::Result<()> {
        let path = path.as_ref();
        let parent = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        let name = path.file_name().map_or_else(|| "report".into(), |n| n.to_string_lossy());
        let tmp = parent.join(format!(".{name}.{}.tmp", std::process::id()));

        let write = || -> std::io::Result<()> {
            let mut report = BufWriter::new(File::create(&tmp)?);
            report.write_all(data)?;
            report.flush()?;
            report.get_ref().sync_all()
        };

        let result = write().and_then(|()| fs::rename(&tmp, path));
        if result.is_err() {
            let _ = fs::remove_file(&tmp);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atomic_write_replaces_contents() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("report.txt");
        fs::write(&target, "old").unwrap();

        FileWriter::atomic_write(&target, b"new report\n").unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "new report\n");
        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn failed_rename_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("report.txt");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep"), "x").unwrap();

        assert!(FileWriter::atomic_write(&target, b"data").is_err());

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["report.txt".to_string()]);
    }
}
