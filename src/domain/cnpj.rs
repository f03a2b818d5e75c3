/// Number of digits in a CNPJ.
pub const CNPJ_LEN: usize = 14;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a CNPJ")]
    Empty,
    #[error("CNPJ must have 14 digits")]
    WrongLength(usize),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CnpjFormatError {
    #[error("malformed CNPJ {0:?}: expected exactly 14 digits")]
    Malformed(String),
}

/// Drops every character that is not an ASCII digit.
pub fn sanitize(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Maximum-length hint of the input field: punctuation is stripped as it is
/// typed, so the cap applies to the first 14 digits.
pub fn cap_field(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(CNPJ_LEN)
        .collect()
}

pub fn validate(digits: &str) -> Result<(), ValidationError> {
    if digits.is_empty() {
        return Err(ValidationError::Empty);
    }
    let len = digits.chars().count();
    if len != CNPJ_LEN {
        return Err(ValidationError::WrongLength(len));
    }
    Ok(())
}

/// Renders a 14-digit identifier as `NN.NNN.NNN/NNNN-NN`.
pub fn format_cnpj(identifier: &str) -> Result<String, CnpjFormatError> {
    if identifier.len() != CNPJ_LEN || !identifier.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CnpjFormatError::Malformed(identifier.to_string()));
    }
    Ok(format!(
        "{}.{}.{}/{}-{}",
        &identifier[0..2],
        &identifier[2..5],
        &identifier[5..8],
        &identifier[8..12],
        &identifier[12..14]
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_keeps_only_digits() {
        assert_eq!(sanitize("12.345.678/0001-90"), "12345678000190");
        assert_eq!(sanitize("abc"), "");
        assert_eq!(sanitize(" 1a2b3c !@#$%^&*() 4 "), "1234");
        assert_eq!(sanitize("١٢٣"), "");
    }

    #[test]
    fn sanitized_value_never_contains_non_digits() {
        let samples = [
            "",
            "0",
            "CNPJ: 11.222.333/0001-81",
            "ação 42 ñ",
            "\t\n12\r34",
            "９８７",
            "-_-12345678901234567890",
        ];
        for raw in samples {
            let out = sanitize(raw);
            assert!(out.chars().all(|c| c.is_ascii_digit()), "{raw:?} -> {out:?}");
        }
    }

    #[test]
    fn sanitize_does_not_truncate() {
        assert_eq!(sanitize("123456789012345").len(), 15);
    }

    #[test]
    fn cap_field_limits_digits_not_punctuation() {
        assert_eq!(cap_field("12.345.678/0001-90"), "12345678000190");
        assert_eq!(cap_field("12.345.678/0001-90999"), "12345678000190");
        assert_eq!(cap_field("123"), "123");
        assert_eq!(cap_field("ééééééééééééééé"), "");
        assert_eq!(validate(&cap_field(&format_cnpj("12345678000190").unwrap())), Ok(()));
    }

    #[test]
    fn validate_reports_empty_and_wrong_length() {
        assert_eq!(validate(""), Err(ValidationError::Empty));
        assert_eq!(validate("12345"), Err(ValidationError::WrongLength(5)));
        assert_eq!(
            validate("123456789012345"),
            Err(ValidationError::WrongLength(15))
        );
        assert_eq!(validate("12345678000190"), Ok(()));
    }

    #[test]
    fn validation_messages() {
        assert_eq!(ValidationError::Empty.to_string(), "Please enter a CNPJ");
        assert_eq!(
            ValidationError::WrongLength(3).to_string(),
            "CNPJ must have 14 digits"
        );
    }

    #[test]
    fn format_groups_segments() {
        assert_eq!(
            format_cnpj("12345678000190").unwrap(),
            "12.345.678/0001-90"
        );
        assert_eq!(
            format_cnpj("12345678000190").unwrap(),
            format_cnpj("12345678000190").unwrap()
        );
    }

    #[test]
    fn format_rejects_malformed_input() {
        assert!(format_cnpj("1234567800019").is_err());
        assert!(format_cnpj("123456780001901").is_err());
        assert!(format_cnpj("1234567800019x").is_err());
        assert!(format_cnpj("12.345.678/0001-90").is_err());
        assert!(format_cnpj("").is_err());
    }
}
