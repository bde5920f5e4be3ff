//! CLI for the facetlink query-string codec.

mod commands;

use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand, ValueEnum};
use facetlink_core::config;
use facetlink_core::filter::FilterType;
use facetlink_core::query::FILTER_KEYS;
use facetlink_core::sort::SortParam;

use commands::{
    run_applied, run_clear_link, run_filter_link, run_price_link, run_remove_link,
    run_resolve_sort, run_sort_link, run_sort_menu,
};

/// Top-level CLI for facetlink.
#[derive(Debug, Parser)]
#[command(name = "facetlink")]
#[command(about = "facetlink: build and inspect storefront collection filter/sort links", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Filter type as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterKind {
    List,
    PriceRange,
}

impl From<FilterKind> for FilterType {
    fn from(kind: FilterKind) -> Self {
        match kind {
            FilterKind::List => FilterType::List,
            FilterKind::PriceRange => FilterType::PriceRange,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the link that applies a filter option.
    FilterLink {
        /// Filter type of the option.
        #[arg(long = "type", value_enum)]
        filter_type: FilterKind,
        /// Option input JSON, e.g. '{"productVendor":"Acme"}'.
        #[arg(long)]
        input: String,
        /// Current page (`path?query`, bare `?query`, or absolute URL).
        #[arg(long)]
        url: Option<String>,
    },

    /// Print the link that removes an applied filter.
    RemoveLink {
        /// Search parameter key of the applied filter.
        #[arg(long, value_parser = PossibleValuesParser::new(FILTER_KEYS))]
        key: String,
        /// Search parameter value of the applied filter.
        #[arg(long)]
        value: String,
        /// Chip label (defaults to the value).
        #[arg(long)]
        label: Option<String>,
        #[arg(long)]
        url: Option<String>,
    },

    /// Print the link that switches the sort order.
    SortLink {
        /// One of price-low-high, price-high-low, best-selling, newest, featured.
        sort: SortParam,
        #[arg(long)]
        url: Option<String>,
    },

    /// Print the link with every filter removed (sort is kept).
    ClearLink {
        #[arg(long)]
        url: Option<String>,
    },

    /// Print the catalog sort key and direction for a sort value.
    ResolveSort {
        /// Raw `sort` value; unknown or missing resolves to RELEVANCE.
        sort: Option<String>,
    },

    /// List the filters applied by a URL.
    Applied {
        #[arg(long)]
        url: Option<String>,
        /// Print the catalog filter and sort variables as JSON instead of chips.
        #[arg(long)]
        json: bool,
    },

    /// Print the sort menu entries for a URL.
    SortMenu {
        #[arg(long)]
        url: Option<String>,
    },

    /// Print the link for edited price fields, or nothing if unchanged.
    PriceLink {
        /// Minimum price text (empty to leave unset).
        #[arg(long, default_value = "")]
        min: String,
        /// Maximum price text (empty to leave unset).
        #[arg(long, default_value = "")]
        max: String,
        #[arg(long)]
        url: Option<String>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::FilterLink {
                filter_type,
                input,
                url,
            } => run_filter_link(&cfg, filter_type.into(), &input, url.as_deref())?,
            CliCommand::RemoveLink {
                key,
                value,
                label,
                url,
            } => run_remove_link(&cfg, &key, &value, label.as_deref(), url.as_deref())?,
            CliCommand::SortLink { sort, url } => run_sort_link(&cfg, sort, url.as_deref())?,
            CliCommand::ClearLink { url } => run_clear_link(&cfg, url.as_deref())?,
            CliCommand::ResolveSort { sort } => run_resolve_sort(sort.as_deref())?,
            CliCommand::Applied { url, json } => run_applied(&cfg, url.as_deref(), json)?,
            CliCommand::SortMenu { url } => run_sort_menu(&cfg, url.as_deref())?,
            CliCommand::PriceLink { min, max, url } => {
                run_price_link(&cfg, &min, &max, url.as_deref())?
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
