// src/args.rs
use clap::{ArgAction, Parser, Subcommand, ValueEnum, ValueHint};
use feedjoin_domain::Relation;
use feedjoin_infra::DEFAULT_BASE_URL;
use feedjoin_shared_kernel::Resource;

#[derive(Parser, Debug)]
#[command(name = "feedjoin", version, about = "Fetch, sort and join JSON collections")]
pub struct Args {
    /// Base URL of the API
    #[arg(
        long,
        env = "FEEDJOIN_BASE_URL",
        default_value = DEFAULT_BASE_URL,
        value_hint = ValueHint::Url,
        global = true,
        help_heading = "Connection"
    )]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "FEEDJOIN_TIMEOUT_SECS", global = true, help_heading = "Connection")]
    pub timeout_secs: Option<u64>,

    /// Print JSON on a single line
    #[arg(long, global = true, help_heading = "Output")]
    pub compact: bool,

    /// Increase log verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = ArgAction::Count, global = true, help_heading = "Output")]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Fetch a collection sorted by title length, longest first (empty array on failure)
    Sorted {
        #[arg(value_enum)]
        resource: ResourceArg,

        /// Sort shortest first
        #[arg(long)]
        ascending: bool,
    },

    /// Join a child collection onto its parent collection
    Joined {
        #[arg(value_enum)]
        relation: RelationArg,
    },

    /// Fetch a collection as is
    Fetch {
        #[arg(value_enum)]
        resource: ResourceArg,
    },

    /// Print a random month name
    RandomMonth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResourceArg {
    Albums,
    Photos,
    Users,
    Posts,
}

impl From<ResourceArg> for Resource {
    fn from(arg: ResourceArg) -> Self {
        match arg {
            ResourceArg::Albums => Self::Albums,
            ResourceArg::Photos => Self::Photos,
            ResourceArg::Users => Self::Users,
            ResourceArg::Posts => Self::Posts,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RelationArg {
    AlbumsWithPhotos,
    UsersWithPosts,
}

impl From<RelationArg> for Relation {
    fn from(arg: RelationArg) -> Self {
        match arg {
            RelationArg::AlbumsWithPhotos => Self::ALBUMS_WITH_PHOTOS,
            RelationArg::UsersWithPosts => Self::USERS_WITH_POSTS,
        }
    }
}
