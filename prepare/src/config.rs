use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// собрать каталог эмодзи и поисковый индекс из emoji-test.txt и data.json
#[derive(Debug, Parser)]
#[command(version)]
pub struct Args
{
    /// emoji-test.txt из Unicode
    #[arg(long, default_value = "emoji-test.txt")]
    pub emoji_test: PathBuf,

    /// JSON с тегами эмодзи
    #[arg(long, default_value = "data.json")]
    pub tags: PathBuf,

    /// куда записать каталог
    #[arg(long, default_value = "emojis.json")]
    pub json_out: PathBuf,

    /// куда записать таблицу токенов
    #[arg(long, default_value = "emojis.rs")]
    pub table_out: PathBuf,

    /// подробный вывод
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args
{
    /// уровень логирования по умолчанию, RUST_LOG имеет приоритет
    pub fn log_level(&self) -> LevelFilter
    {
        match self.verbose {
            true => LevelFilter::Debug,
            false => LevelFilter::Info,
        }
    }
}
