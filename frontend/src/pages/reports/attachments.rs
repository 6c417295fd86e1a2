//! Evidence attachment limits, enforced before any byte leaves the browser:
//! at most three files, JPEG or PNG only, 10 MB each. A violation blocks the
//! submission locally and names the limit that was hit.

pub const MAX_FILES: usize = 3;
pub const MAX_FILE_BYTES: f64 = 10.0 * 1024.0 * 1024.0;
const ALLOWED_TYPES: &[&str] = &["image/jpeg", "image/png"];

pub const TOO_MANY_MESSAGE: &str = "Solo puedes adjuntar un máximo de 3 imágenes.";
pub const BAD_TYPE_MESSAGE: &str = "Solo se permiten imágenes JPEG o PNG.";
pub const TOO_BIG_MESSAGE: &str = "Cada imagen debe pesar máximo 10 MB.";

/// Checks `(mime type, size in bytes)` pairs as the browser reports them.
/// The count limit is checked first so adding a fourth file names that
/// violation even when the file itself is also oversized.
pub fn check_attachments(files: &[(String, f64)]) -> Result<(), String> {
    if files.len() > MAX_FILES {
        return Err(TOO_MANY_MESSAGE.to_string());
    }
    for (mime, size) in files {
        if !ALLOWED_TYPES.contains(&mime.as_str()) {
            return Err(BAD_TYPE_MESSAGE.to_string());
        }
        if *size > MAX_FILE_BYTES {
            return Err(TOO_BIG_MESSAGE.to_string());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jpeg(size: f64) -> (String, f64) {
        ("image/jpeg".to_string(), size)
    }

    #[test]
    fn three_compliant_files_pass() {
        let files = vec![jpeg(1024.0), ("image/png".to_string(), 2048.0), jpeg(4096.0)];
        assert!(check_attachments(&files).is_ok());
    }

    #[test]
    fn a_fourth_file_is_rejected_by_count() {
        let files = vec![jpeg(1.0), jpeg(1.0), jpeg(1.0), jpeg(1.0)];
        assert_eq!(check_attachments(&files).unwrap_err(), TOO_MANY_MESSAGE);
    }

    #[test]
    fn gif_is_rejected_by_type() {
        let files = vec![("image/gif".to_string(), 1.0)];
        assert_eq!(check_attachments(&files).unwrap_err(), BAD_TYPE_MESSAGE);
    }

    #[test]
    fn oversized_file_is_rejected() {
        let files = vec![jpeg(MAX_FILE_BYTES + 1.0)];
        assert_eq!(check_attachments(&files).unwrap_err(), TOO_BIG_MESSAGE);
        // exactly 10 MB is still fine
        assert!(check_attachments(&[jpeg(MAX_FILE_BYTES)]).is_ok());
    }

    #[test]
    fn empty_selection_is_allowed() {
        assert!(check_attachments(&[]).is_ok());
    }
}
