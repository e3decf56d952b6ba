use crate::SourceError;

/// статус квалификации эмодзи
/// берется из emoji-test.txt: поле после первой ';'
/// см. https://unicode.org/reports/tr51/, ED-18, ED-18a, ED-19
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub enum Qualification
{
    /// компонент (например, модификатор цвета кожи)
    Component,
    /// полностью квалифицированная последовательность
    FullyQualified,
    /// минимально квалифицированная последовательность
    MinimallyQualified,
    /// неквалифицированная последовательность
    Unqualified,
}

impl TryFrom<&str> for Qualification
{
    type Error = SourceError;

    #[inline]
    fn try_from(value: &str) -> Result<Self, Self::Error>
    {
        Ok(match value {
            "component" => Self::Component,
            "fully-qualified" => Self::FullyQualified,
            "minimally-qualified" => Self::MinimallyQualified,
            "unqualified" => Self::Unqualified,
            _ => return Err(SourceError::UnknownQualification(value.to_owned())),
        })
    }
}

impl core::fmt::Display for Qualification
{
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        let value = match self {
            Qualification::Component => "component",
            Qualification::FullyQualified => "fully-qualified",
            Qualification::MinimallyQualified => "minimally-qualified",
            Qualification::Unqualified => "unqualified",
        };

        write!(f, "{}", value)
    }
}
