// src/config.rs
use derive_builder::Builder;
use feedjoin_domain::{Relation, SortOrder};
use feedjoin_infra::HttpFetcherConfig;
use feedjoin_shared_kernel::Resource;

use crate::args::{Args, Command};

/// What a single invocation does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    Sorted { resource: Resource, order: SortOrder },
    Joined(Relation),
    Fetch(Resource),
    RandomMonth,
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    pub task: Task,
    #[builder(default)]
    pub fetcher: HttpFetcherConfig,
    #[builder(default)]
    pub compact: bool,
    #[builder(default)]
    pub verbosity: u8,
}

impl From<Command> for Task {
    fn from(command: Command) -> Self {
        match command {
            Command::Sorted { resource, ascending } => Self::Sorted {
                resource: resource.into(),
                order: SortOrder::from(!ascending),
            },
            Command::Joined { relation } => Self::Joined(relation.into()),
            Command::Fetch { resource } => Self::Fetch(resource.into()),
            Command::RandomMonth => Self::RandomMonth,
        }
    }
}

impl TryFrom<Args> for Config {
    type Error = ConfigBuilderError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let fetcher = HttpFetcherConfig { base_url: args.base_url, timeout_secs: args.timeout_secs };

        ConfigBuilder::default()
            .task(Task::from(args.command))
            .fetcher(fetcher)
            .compact(args.compact)
            .verbosity(args.verbose)
            .build()
    }
}
