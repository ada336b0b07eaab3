use std::path::{Path, PathBuf};

/// Join path segments onto a base, one component at a time
pub fn join_segments<I, S>(base: impl AsRef<Path>, segments: I) -> PathBuf
where
    I: IntoIterator<Item = S>,
    S: AsRef<Path>,
{
    let mut path = base.as_ref().to_path_buf();
    for segment in segments {
        path.push(segment);
    }
    path
}

/// Strip a leading `.` component so messages read `source/...` rather than `./source/...`
pub fn display_path(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    path.strip_prefix(".").map(Path::to_path_buf).unwrap_or_else(|_| path.to_path_buf())
}
