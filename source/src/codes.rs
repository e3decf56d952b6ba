use crate::SourceError;

/// разбор списка кодпоинтов в hex (например, "2639 FE0F") в соответствующие символы
pub fn parse_codes(codes: &str) -> Result<Vec<char>, SourceError>
{
    codes.split_whitespace().map(parse_code).collect()
}

/// разбор одного кодпоинта
fn parse_code(field: &str) -> Result<char, SourceError>
{
    let invalid = |reason: String| SourceError::InvalidCode {
        field: field.to_owned(),
        reason,
    };

    let code = u32::from_str_radix(field, 16).map_err(|e| invalid(e.to_string()))?;

    // суррогаты и значения за пределами U+10FFFF символами не являются
    char::from_u32(code).ok_or_else(|| invalid("не является скалярным значением Unicode".to_owned()))
}
