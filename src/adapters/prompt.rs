use crate::domain::ports::Confirmer;
use crate::utils::error::Result;
use async_trait::async_trait;
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout,
};
use tokio::sync::Mutex;

/// Asks on `output` and reads one answer line from `input`. No timeout.
pub struct PromptConfirmer<R, W> {
    input: Mutex<R>,
    output: Mutex<W>,
}

impl<R, W> PromptConfirmer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: Mutex::new(input),
            output: Mutex::new(output),
        }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input.into_inner(), self.output.into_inner())
    }
}

impl PromptConfirmer<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[async_trait]
impl<R, W> Confirmer for PromptConfirmer<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn confirm(&self, question: &str) -> Result<bool> {
        {
            let mut output = self.output.lock().await;
            output.write_all(question.as_bytes()).await?;
            output.flush().await?;
        }

        let mut line = String::new();
        let read = self.input.lock().await.read_line(&mut line).await?;
        if read == 0 {
            // closed stdin counts as "no"
            tracing::debug!("End of input while waiting for confirmation");
            return Ok(false);
        }

        Ok(is_affirmative(&line))
    }
}
