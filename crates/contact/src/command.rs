use std::sync::Arc;

use async_trait::async_trait;
use landing_shared::bail;

use crate::{ContactSubmission, SheetRow};

/// Destination able to append one row to a spreadsheet range.
#[async_trait]
pub trait Append: Send + Sync {
    async fn append(&self, range: &str, row: &SheetRow) -> anyhow::Result<()>;
}

/// Where relayed submissions land.
#[derive(Clone, Debug)]
pub struct Target {
    pub range: String,
    pub timezone: String,
}

/// The relay operation: one submission in, one appended row out.
///
/// Nothing is kept between calls, so retrying an identical submission
/// appends a second identical row.
#[derive(Clone)]
pub struct Command {
    sheets: Arc<dyn Append>,
    target: Target,
}

impl Command {
    pub fn new(sheets: impl Append + 'static, target: Target) -> Self {
        Self {
            sheets: Arc::new(sheets),
            target,
        }
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    #[tracing::instrument(skip_all, fields(range = %self.target.range))]
    pub async fn submit(&self, input: ContactSubmission) -> landing_shared::Result<SheetRow> {
        if self.target.range.is_empty() {
            bail!("sheet range is not configured");
        }

        let row = SheetRow::from_submission(input, &self.target.timezone);

        self.sheets.append(&self.target.range, &row).await?;

        tracing::info!("contact submission appended");

        Ok(row)
    }
}
