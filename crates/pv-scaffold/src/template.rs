/// Source of the generated Streamlit app, embedded verbatim.
pub const APP_CODE: &str = include_str!("../templates/app.py");

pub const DEFAULT_DESTINATION: &str = "/Users/mikolaj/Desktop/ModelFinansowyPV/app.py";

/// Printed once the app file is on disk.
pub const CONFIRMATION: &str = "Plik app.py utworzony!";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_code_boundaries() {
        assert!(APP_CODE.starts_with("\"\"\"\nModel Finansowy Farmy Fotowoltaicznej\n"));
        assert!(APP_CODE.ends_with("(wartość testowa)\")\n"));
    }

    #[test]
    fn test_app_code_keeps_non_ascii() {
        assert!(APP_CODE.contains("page_icon=\"\u{2600}\u{fe0f}\""));
        assert!(APP_CODE.contains("st.title(\"\u{2600}\u{fe0f} Model Finansowy Farmy Fotowoltaicznej 1MW\")"));
        assert!(APP_CODE.contains("Aplikacja działa! Teraz dodajmy pełną funkcjonalność..."));
    }

    #[test]
    fn test_app_code_npv_stub() {
        assert!(APP_CODE.contains("if st.button(\"Test NPV\"):"));
        assert!(APP_CODE.contains("st.success(\"NPV = -531 PLN (wartość testowa)\")"));
    }
}
