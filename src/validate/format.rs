//! Input formatting and upload gatekeeping

use crate::state::FileInfo;

/// Maximum digits kept in the phone field
pub const PHONE_MAX_DIGITS: usize = 10;

/// Maximum accepted upload size (5 MiB)
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// Declared content types accepted for the profile picture
pub const ALLOWED_UPLOAD_TYPES: [&str; 4] =
    ["image/jpeg", "image/jpg", "image/png", "image/gif"];

/// Normalize a phone number as the user types: strip every non-digit
/// character, then truncate to the first ten digits.
pub fn format_phone(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(PHONE_MAX_DIGITS)
        .collect()
}

/// Gate an upload on size and declared content type.
/// Returns the user-facing rejection message on failure.
pub fn check_upload(info: &FileInfo) -> Result<(), String> {
    if info.size > MAX_UPLOAD_BYTES {
        return Err("File size must be less than 5MB".to_string());
    }
    if !ALLOWED_UPLOAD_TYPES.contains(&info.content_type.as_str()) {
        return Err("Please upload a valid image file (JPG, PNG, GIF)".to_string());
    }
    Ok(())
}

/// Guess the declared content type for a picked file from its extension.
/// Unknown extensions map to `application/octet-stream`, which the gate
/// then rejects.
pub fn content_type_for_path(path: &str) -> String {
    let ext = path
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    match ext.as_str() {
        "jpeg" => "image/jpeg",
        "jpg" => "image/jpg",
        "png" => "image/png",
        "gif" => "image/gif",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn upload(size: u64, content_type: &str) -> FileInfo {
        FileInfo {
            file_name: "avatar".to_string(),
            size,
            content_type: content_type.to_string(),
        }
    }

    mod phone {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_strips_punctuation_and_truncates() {
            assert_eq!(format_phone("(555) 123-4567 ext9"), "5551234567");
        }

        #[test]
        fn test_short_input_kept_as_is() {
            assert_eq!(format_phone("555-12"), "55512");
        }

        #[test]
        fn test_empty_input() {
            assert_eq!(format_phone(""), "");
        }

        #[test]
        fn test_letters_only_becomes_empty() {
            assert_eq!(format_phone("call me"), "");
        }
    }

    mod uploads {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_small_png_accepted() {
            assert!(check_upload(&upload(1024 * 1024, "image/png")).is_ok());
        }

        #[test]
        fn test_oversized_file_rejected() {
            let err = check_upload(&upload(6 * 1024 * 1024, "image/png")).unwrap_err();
            assert!(err.contains("5MB"));
        }

        #[test]
        fn test_exactly_five_mib_accepted() {
            assert!(check_upload(&upload(MAX_UPLOAD_BYTES, "image/gif")).is_ok());
        }

        #[test]
        fn test_pdf_rejected() {
            let err = check_upload(&upload(1024, "application/pdf")).unwrap_err();
            assert!(err.contains("valid image"));
        }

        #[test]
        fn test_content_type_from_extension() {
            assert_eq!(content_type_for_path("me.PNG"), "image/png");
            assert_eq!(content_type_for_path("scan.pdf"), "application/pdf");
            assert_eq!(content_type_for_path("noext"), "application/octet-stream");
        }
    }
}
