use stylist::GlobalStyle;

use crate::error::BindError;

pub const RESULT_STYLES: &str = r#"
    .loading {
        color: #f59e0b;
        font-weight: 500;
    }

    .success {
        color: #10b981;
        font-weight: 500;
    }

    .error {
        color: #ef4444;
        font-weight: 500;
    }

    .test-result {
        white-space: pre-wrap;
        word-wrap: break-word;
    }
"#;

/// Mounts the result styles into the document head.
pub fn inject() -> Result<GlobalStyle, BindError> {
    GlobalStyle::new(RESULT_STYLES).map_err(|e| BindError::Styles(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::RESULT_STYLES;

    #[test]
    fn covers_every_result_tone() {
        for class in [".loading", ".success", ".error", ".test-result"] {
            assert!(RESULT_STYLES.contains(class), "missing {class}");
        }
    }
}
