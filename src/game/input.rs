use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Collect player words from a line-oriented reader until end of input.
///
/// Lines are kept verbatim, blanks included; validation happens later
/// against the dictionary.
pub async fn collect_words<R>(reader: R) -> std::io::Result<Vec<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut words = Vec::new();
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        words.push(line);
    }
    Ok(words)
}
