use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use eyre::{Context as _, Result};
use serde::Serialize;

/// Writes the document as pretty-printed JSON to the given file or stdout.
///
/// Non-ASCII characters are written as-is.
pub fn write_json<T: Serialize>(data: &T, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file `{}`", path.display()))?;

            write_pretty(BufWriter::new(file), data)
                .with_context(|| format!("failed to write output file `{}`", path.display()))?;

            info!("Wrote: {}", path.display());
        }
        None => {
            let stdout = io::stdout().lock();

            write_pretty(BufWriter::new(stdout), data).context("failed to write to stdout")?;
        }
    }

    Ok(())
}

fn write_pretty<W: Write, T: Serialize>(mut writer: W, data: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, data).context("failed to serialize output")?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{env, fs, process};

    use serde_json::json;

    use super::*;

    #[test]
    fn pretty_with_literal_unicode() {
        let mut buf = Vec::new();
        let data = json!({ "personaname": "Смешарик ☕", "level": 7 });

        write_pretty(&mut buf, &data).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "{\n  \"personaname\": \"Смешарик ☕\",\n  \"level\": 7\n}\n"
        );
    }

    #[test]
    fn writes_file() {
        let path = env::temp_dir().join(format!("steam-dump-output-{}.json", process::id()));
        let data = json!({ "steam_id": "1" });

        write_json(&data, Some(&path)).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(written, "{\n  \"steam_id\": \"1\"\n}\n");
    }
}
