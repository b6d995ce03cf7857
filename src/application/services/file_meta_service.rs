use std::collections::HashMap;

use crate::domain::entities::{FileId, FileMeta, FileType};

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Display fields for an uploaded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetaView {
    pub raw_path: String,
    pub file_type: FileType,
    pub size: String,
    pub icon_name: String,
}

/// Builds the download path of a file under the API base.
#[must_use]
pub fn build_file_path(api_base: &str, file_id: FileId) -> String {
    format!("{}/files/{file_id}", api_base.trim_end_matches('/'))
}

#[must_use]
pub fn mime_to_file_type(mime: &str) -> FileType {
    FileType::from_mime(mime)
}

/// Formats a byte count with binary units, e.g. `512B`, `1.5KB`, `3MB`.
#[must_use]
pub fn prettify_file_size(size: u64) -> String {
    let bytes = u128::from(size);
    let mut unit = 0;
    let mut divisor: u128 = 1;

    while unit < SIZE_UNITS.len() - 1 && bytes >= divisor * 1024 {
        divisor *= 1024;
        unit += 1;
    }

    // one decimal digit, truncated
    let scaled = bytes * 10 / divisor;
    let (whole, tenths) = (scaled / 10, scaled % 10);

    if tenths == 0 {
        format!("{whole}{}", SIZE_UNITS[unit])
    } else {
        format!("{whole}.{tenths}{}", SIZE_UNITS[unit])
    }
}

#[must_use]
pub fn file_icon_name(file_type: FileType) -> String {
    match file_type {
        FileType::File => "file".to_string(),
        FileType::Audio => "file-music".to_string(),
        other => format!("file-{other}"),
    }
}

/// Looks up `file_id` and derives its display fields. Unknown files get the
/// generic file placeholders.
#[must_use]
pub fn file_meta_view(
    file_id: FileId,
    metas: &HashMap<FileId, FileMeta>,
    api_base: &str,
) -> FileMetaView {
    let Some(meta) = metas.get(&file_id) else {
        return FileMetaView {
            raw_path: String::new(),
            file_type: FileType::File,
            size: "0B".to_string(),
            icon_name: file_icon_name(FileType::File),
        };
    };

    let file_type = mime_to_file_type(&meta.mime);
    FileMetaView {
        raw_path: build_file_path(api_base, meta.id),
        file_type,
        size: prettify_file_size(meta.size),
        icon_name: file_icon_name(file_type),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, "0B" ; "zero")]
    #[test_case(512, "512B" ; "bytes")]
    #[test_case(1024, "1KB" ; "one_kib")]
    #[test_case(1536, "1.5KB" ; "fractional")]
    #[test_case(3 * 1024 * 1024, "3MB" ; "mib")]
    #[test_case(5 * 1024 * 1024 * 1024 * 1024 * 1024, "5120TB" ; "caps_at_tb")]
    fn test_prettify_file_size(size: u64, expected: &str) {
        assert_eq!(prettify_file_size(size), expected);
    }

    #[test_case("image/png", FileType::Image, "file-image" ; "image")]
    #[test_case("video/mp4", FileType::Video, "file-video" ; "video")]
    #[test_case("audio/ogg", FileType::Audio, "file-music" ; "audio")]
    #[test_case("application/pdf", FileType::File, "file" ; "other")]
    fn test_type_and_icon(mime: &str, file_type: FileType, icon: &str) {
        assert_eq!(mime_to_file_type(mime), file_type);
        assert_eq!(file_icon_name(file_type), icon);
    }

    #[test]
    fn test_view_of_known_file() {
        let id = FileId::from_u128(7);
        let metas = HashMap::from([(
            id,
            FileMeta {
                id,
                name: "song.mp3".to_string(),
                mime: "audio/mpeg".to_string(),
                size: 2048,
            },
        )]);

        let view = file_meta_view(id, &metas, "/api/v3/");
        assert_eq!(view.raw_path, format!("/api/v3/files/{id}"));
        assert_eq!(view.file_type, FileType::Audio);
        assert_eq!(view.size, "2KB");
        assert_eq!(view.icon_name, "file-music");
    }

    #[test]
    fn test_view_of_unknown_file() {
        let view = file_meta_view(FileId::from_u128(1), &HashMap::new(), "/api/v3");
        assert_eq!(view.raw_path, "");
        assert_eq!(view.size, "0B");
        assert_eq!(view.icon_name, "file");
    }
}
