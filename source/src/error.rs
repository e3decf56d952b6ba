/// ошибки разбора исходных данных
/// любая из них прерывает подготовку каталога целиком
#[derive(thiserror::Error, Debug)]
pub enum SourceError
{
    /// data.json не удалось разобрать как массив записей
    #[error("некорректные данные тегов: {0}")]
    TagData(#[from] serde_json::Error),

    /// поле кодпоинта не является hex-числом или скалярным значением Unicode
    #[error("некорректный кодпоинт {field:?}: {reason}")]
    InvalidCode
    {
        field: String,
        reason: String,
    },

    /// кодпоинты строки не совпадают с символами графемы
    #[error("строка {line}: кодпоинты {codes:04X?} не совпадают с графемой {grapheme:04X?}")]
    MismatchedCodes
    {
        line: usize,
        codes: Vec<u32>,
        grapheme: Vec<u32>,
    },

    /// неизвестный статус квалификации
    #[error("неизвестный статус квалификации: {0:?}")]
    UnknownQualification(String),
}
