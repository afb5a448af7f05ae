//! Terminal front-end. Each input line replaces the query and presses Enter.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::view::{Key, SearchView};

const PROMPT: &str = "> ";

/// Run until `input` reaches EOF. Blank lines are blocked submissions and
/// print nothing.
pub async fn run<R, W>(view: &mut SearchView, input: R, output: &mut W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let config = view.config();
    let banner = format!("{}\n{}\n", config.title, config.subtitle);
    output.write_all(banner.as_bytes()).await?;

    let mut lines = input.lines();
    loop {
        output.write_all(PROMPT.as_bytes()).await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        view.on_query_change(line);
        if view.on_key(Key::Enter).await {
            output.write_all(view.screen().to_text().as_bytes()).await?;
        }
    }
    output.write_all(b"\n").await?;
    output.flush().await
}
