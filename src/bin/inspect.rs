//! Command-line link inspector.
//!
//! Classifies URLs and page snapshots without running the HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # Classify one or more URLs
//! cargo run --bin inspect -- url "https://amzn.to/3xYz?utm_source=blog"
//!
//! # Resolve relative URLs against a base
//! cargo run --bin inspect -- url /pricing?gclid=abc --base https://example.com/
//!
//! # Scan a page snapshot (JSON, `-` reads stdin)
//! cargo run --bin inspect -- scan page.json
//!
//! # List the built-in rules
//! cargo run --bin inspect -- rules
//! ```
//!
//! Every command accepts `--json` for machine-readable output.

use link_inspector::api::dto::rules::RulesResponse;
use link_inspector::application::services::{Classifier, LinkReport, ScanCache, ScanService};
use link_inspector::config::DEFAULT_MAX_LINKS_PER_SCAN;
use link_inspector::domain::entities::{LinkVerdict, PageSnapshot};
use link_inspector::domain::rules::RuleSet;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use serde::Serialize;
use std::io::Read;
use std::sync::Arc;
use url::Url;

/// Inspect links for tracking parameters, affiliate networks and popups.
#[derive(Parser)]
#[command(name = "inspect")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print JSON instead of coloured text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify URLs
    Url {
        /// URLs to classify
        #[arg(required = true)]
        urls: Vec<String>,

        /// Base URL for relative inputs
        #[arg(short, long)]
        base: Option<String>,
    },

    /// Scan a page snapshot file (`-` for stdin)
    Scan {
        file: String,

        /// Maximum number of elements to inspect
        #[arg(long, default_value_t = DEFAULT_MAX_LINKS_PER_SCAN)]
        max_links: usize,
    },

    /// List the built-in rules
    Rules,
}

#[derive(Serialize)]
struct UrlOutput<'a> {
    url: &'a str,
    verdict: &'a LinkVerdict,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let rules = Arc::new(RuleSet::builtin().context("Failed to compile built-in rules")?);
    let classifier = Classifier::new(rules);

    match cli.command {
        Commands::Url { urls, base } => classify_urls(&classifier, &urls, base, cli.json),
        Commands::Scan { file, max_links } => scan_file(classifier, &file, max_links, cli.json),
        Commands::Rules => list_rules(&classifier, cli.json),
    }
}

fn classify_urls(
    classifier: &Classifier,
    urls: &[String],
    base: Option<String>,
    json: bool,
) -> Result<()> {
    let base = base
        .map(|b| Url::parse(&b).with_context(|| format!("Invalid base URL '{}'", b)))
        .transpose()?;

    let verdicts: Vec<LinkVerdict> = urls
        .iter()
        .map(|url| classifier.classify_url(url, base.as_ref()))
        .collect();

    if json {
        let output: Vec<UrlOutput> = urls
            .iter()
            .zip(&verdicts)
            .map(|(url, verdict)| UrlOutput { url, verdict })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for (url, verdict) in urls.iter().zip(&verdicts) {
        println!("{}", url.bright_white().bold());
        print_verdict(verdict, "  ");
        println!();
    }

    Ok(())
}

fn scan_file(classifier: Classifier, file: &str, max_links: usize, json: bool) -> Result<()> {
    let raw = if file == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(file).with_context(|| format!("Failed to read '{}'", file))?
    };

    let page: PageSnapshot =
        serde_json::from_str(&raw).with_context(|| format!("'{}' is not a page snapshot", file))?;

    let service = ScanService::new(classifier, max_links);
    let mut cache = ScanCache::new();
    let report = service.scan_page(&page, &mut cache);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} {}", "Page:".bright_blue().bold(), report.page_url.cyan());
    println!();

    for link in &report.links {
        print_link(link);
    }

    let summary = &report.summary;
    println!("{}", "Summary:".bright_white().bold());
    println!("  Links:          {}", summary.total);
    println!("  With tracking:  {}", summary.with_tracking.to_string().yellow());
    println!("  Affiliate:      {}", summary.affiliate.to_string().magenta());
    println!("  Popup triggers: {}", summary.popup_triggers.to_string().cyan());
    println!("  Anchors:        {}", summary.anchors.to_string().green());
    if summary.truncated {
        println!(
            "{}",
            format!("  Only the first {} elements were inspected", max_links).red()
        );
    }

    Ok(())
}

fn print_link(link: &LinkReport) {
    let label = match (&link.href, link.text.is_empty()) {
        (Some(href), _) => href.clone(),
        (None, false) => link.text.clone(),
        (None, true) => format!("<{}>", link.tag),
    };
    println!(
        "{} {}",
        format!("[{}]", link.index).dimmed(),
        label.bright_white()
    );
    print_verdict(&link.verdict, "    ");
}

fn print_verdict(verdict: &LinkVerdict, indent: &str) {
    let mut printed = false;

    if verdict.url.is_none() && verdict.popup.is_none() {
        println!("{}{}", indent, "unresolvable URL".red());
        printed = true;
    }

    if let Some(domain) = &verdict.domain {
        match verdict.domain_category {
            Some(category) => println!("{}domain    {} ({})", indent, domain, category),
            None => println!("{}domain    {}", indent, domain),
        }
        printed = true;
    }

    for m in &verdict.tracking_parameters {
        println!(
            "{}{}  {}={} - {}",
            indent,
            m.category.as_str().yellow(),
            m.key.bright_yellow(),
            m.value,
            m.display_name
        );
        printed = true;
    }

    if let Some(network) = &verdict.affiliate_network {
        println!("{}{} {}", indent, "affiliate".magenta(), network.bold());
        printed = true;
    }

    if let Some(popup) = &verdict.popup {
        println!(
            "{}{}     {} / {} - {}",
            indent,
            "popup".cyan(),
            popup.kind,
            popup.purpose,
            popup.description
        );
        printed = true;
    }

    if let Some(anchor) = &verdict.anchor {
        let status = if anchor.target_found {
            "found".green()
        } else {
            "missing".red()
        };
        println!(
            "{}{}    #{} ({}) {}",
            indent,
            "anchor".green(),
            anchor.target_id,
            status,
            anchor.section_title.as_deref().unwrap_or("")
        );
        printed = true;
    }

    if !printed {
        println!("{}{}", indent, "nothing found".dimmed());
    }
}

fn list_rules(classifier: &Classifier, json: bool) -> Result<()> {
    let rules = classifier.rules();

    if json {
        let output = RulesResponse::from_rules(rules);
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", "Tracking parameters".bright_blue().bold());
    for def in rules.tracking_definitions() {
        println!(
            "  {:<22} {:<9} {}",
            def.key.bright_yellow(),
            def.category.as_str(),
            def.display_name
        );
    }
    println!();

    println!("{}", "Affiliate networks".bright_blue().bold());
    for network in rules.affiliate_networks() {
        println!("  {}", network.name);
    }
    println!();

    println!("{}", "Domain categories".bright_blue().bold());
    for rule in rules.domain_categories() {
        println!("  {:<12} {}", rule.category.as_str(), rule.hosts.join(", "));
    }

    Ok(())
}
