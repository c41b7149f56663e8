use axum::http::{header::REFERER, HeaderMap};
use axum::response::Redirect;

/// Flash messages are carried as a short code in the redirect query string
/// (`/?flash=<code>`) and expanded to user-facing text when the index page
/// renders. No session or cookie machinery involved.
pub const SUCCESS: &str = "success";
pub const NO_FILE: &str = "no_file";
pub const INVALID_TYPE: &str = "invalid_type";
pub const STORAGE_FAILURE: &str = "storage_failure";
pub const DATABASE_FAILURE: &str = "database_failure";
pub const INTERNAL_ERROR: &str = "internal_error";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flash {
    /// CSS class on the banner: "success" or "error".
    pub kind: &'static str,
    pub message: &'static str,
}

/// Maps a flash code from the query string to its banner. Unknown codes
/// render nothing.
pub fn lookup(code: &str) -> Option<Flash> {
    let flash = match code {
        SUCCESS => Flash {
            kind: "success",
            message: "Successfully uploaded! Details saved.",
        },
        NO_FILE => Flash {
            kind: "error",
            message: "No file selected.",
        },
        INVALID_TYPE => Flash {
            kind: "error",
            message: "Invalid file type. Only PDF, PNG, JPG allowed.",
        },
        STORAGE_FAILURE => Flash {
            kind: "error",
            message: "Could not store the uploaded file. Please try again.",
        },
        DATABASE_FAILURE => Flash {
            kind: "error",
            message: "Could not save your details. Please try again.",
        },
        INTERNAL_ERROR => Flash {
            kind: "error",
            message: "Internal server error. Please try again.",
        },
        _ => return None,
    };
    Some(flash)
}

/// Redirect to the index page carrying a flash code.
pub fn redirect(code: &str) -> Redirect {
    Redirect::to(&format!("/?flash={code}"))
}

/// Redirect back to the referring page (form validation failures return the
/// user to wherever the form was), falling back to the index page.
pub fn redirect_back(headers: &HeaderMap, code: &str) -> Redirect {
    let target = headers
        .get(REFERER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("/");
    let sep = if target.contains('?') { '&' } else { '?' };
    Redirect::to(&format!("{target}{sep}flash={code}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_code_has_a_banner() {
        for code in [
            SUCCESS,
            NO_FILE,
            INVALID_TYPE,
            STORAGE_FAILURE,
            DATABASE_FAILURE,
            INTERNAL_ERROR,
        ] {
            assert!(lookup(code).is_some(), "no banner for '{code}'");
        }
    }

    #[test]
    fn test_unknown_code_renders_nothing() {
        assert!(lookup("drop_table").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_success_is_the_only_success_kind() {
        assert_eq!(lookup(SUCCESS).unwrap().kind, "success");
        assert_eq!(lookup(NO_FILE).unwrap().kind, "error");
        assert_eq!(lookup(DATABASE_FAILURE).unwrap().kind, "error");
    }
}
