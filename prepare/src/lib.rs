use std::fs;

use anyhow::Context;
use log::info;

pub mod catalog;
pub mod config;
pub mod output;
pub mod tokens;

pub use catalog::Catalog;
pub use config::Args;
pub use tokens::{record_tokens, search_index, tokenize, TokenSet};

/// читаем emoji-test.txt и data.json, пишем emojis.json и таблицу токенов
///
/// оба файла формируются в памяти и записываются только после того, как все этапы прошли успешно
pub fn run(args: &Args) -> anyhow::Result<()>
{
    let emoji_test = fs::read_to_string(&args.emoji_test)
        .with_context(|| format!("не удалось прочитать {}", args.emoji_test.display()))?;
    let tag_data =
        fs::read_to_string(&args.tags).with_context(|| format!("не удалось прочитать {}", args.tags.display()))?;

    let catalog = Catalog::build(&emoji_test, &tag_data).with_context(|| {
        format!(
            "не удалось собрать каталог из {} и {}",
            args.emoji_test.display(),
            args.tags.display()
        )
    })?;

    let artifacts = output::render(&catalog)?;
    artifacts.write(&args.json_out, &args.table_out)?;

    output::stats::print(&catalog);

    info!(
        "записано эмодзи: {} -> {}, {}",
        catalog.emojis.len(),
        args.json_out.display(),
        args.table_out.display()
    );

    Ok(())
}
