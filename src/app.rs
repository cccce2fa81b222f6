// src/app.rs
use std::io::Write;

use feedjoin_infra::{HttpFetcher, ThreadRngSource};
use feedjoin_ports::CollectionFetcher;
use feedjoin_shared_kernel::{ErrorContext, Record, Result};
use feedjoin_usecase::{JoinCollections, SortedByTitle, get_random_month};
use log::info;
use serde_json::Value;

use crate::config::{Config, Task};

pub async fn run(config: &Config) -> Result<()> {
    let value = execute(config).await?;
    let stdout = std::io::stdout();
    emit(&value, config.compact, &mut stdout.lock()).context("writing output")
}

/// Runs the configured task and returns what should be printed.
pub async fn execute(config: &Config) -> Result<Value> {
    match config.task {
        Task::RandomMonth => Ok(random_month_value()),
        task => {
            let fetcher = HttpFetcher::new(&config.fetcher)?;
            info!("using {}", config.fetcher.base_url);
            execute_with(&fetcher, task).await
        }
    }
}

/// Same as [`execute`] for any fetcher.
pub async fn execute_with(fetcher: &dyn CollectionFetcher, task: Task) -> Result<Value> {
    let records = match task {
        Task::Sorted { resource, order } => SortedByTitle::new(fetcher, resource).with_order(order).run().await,
        Task::Joined(relation) => JoinCollections::new(fetcher, relation).run().await?,
        Task::Fetch(resource) => fetcher
            .fetch(resource)
            .await
            .with_context(|| format!("fetching {resource}"))?,
        Task::RandomMonth => return Ok(random_month_value()),
    };
    Ok(records_to_value(records))
}

fn random_month_value() -> Value {
    Value::String(get_random_month(&ThreadRngSource).name().to_string())
}

fn records_to_value(records: Vec<Record>) -> Value {
    Value::Array(records.into_iter().map(Value::from).collect())
}

pub fn emit<W: Write>(value: &Value, compact: bool, writer: &mut W) -> Result<()> {
    if compact {
        serde_json::to_writer(&mut *writer, value)?;
    } else {
        serde_json::to_writer_pretty(&mut *writer, value)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
