// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Responsive classes and variables for a flex layout across viewport sizes.
//!
//! This example shows how a host widget would:
//! - load a `ClassConfig` from its settings,
//! - build breakpoint sets for display, gap, and a width variable,
//! - render the class attribute once and resolve single values per viewport width,
//! - apply the width variable to an inline style.
//!
//! Run:
//! - `cargo run -p understory_demos --example responsive_flex`
//! - `RUST_LOG=understory_breakpoints=trace cargo run -p understory_demos --example responsive_flex`

use std::error::Error;

use tracing_subscriber::EnvFilter;
use understory_breakpoints::{
    Breakpoint, BreakpointSet, ClassConfig, ClassList, Direction, Display, Gap, InlineStyle,
    Variable, render, render_at_typed, render_typed, render_vertical,
};

const SETTINGS: &str = r#"{ "namespace": "pf", "version": 5 }"#;

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .init();

    let config: ClassConfig = serde_json::from_str(SETTINGS)?;
    let prefix = config.modifier_prefix();

    let display = BreakpointSet::builder()
        .default(Display::Flex)
        .md(Display::InlineFlex)
        .build();
    let direction = BreakpointSet::builder()
        .default(Direction::Column)
        .lg(Direction::Row)
        .build();
    let gap = BreakpointSet::builder().sm(Gap::Sm).xl(Gap::Lg).build();
    let full_width: BreakpointSet<&str> = [Breakpoint::Default, Breakpoint::Xl]
        .into_iter()
        .map(|bp| (bp, "full-width"))
        .collect();

    let mut classes = ClassList::new();
    classes.add(config.layout("flex", &[]));
    classes.extend_from_str(&render_typed(&display, &prefix));
    classes.extend_from_str(&render_typed(&direction, &prefix));
    classes.extend_from_str(&render(&gap, &prefix, |g| format!("column-{g}")));
    classes.extend_from_str(&render_vertical(&full_width, &prefix, |v| *v));
    println!("class=\"{classes}\"");

    for width in [320, 600, 800, 1024, 1280, 1600] {
        let bp = Breakpoint::for_width(width);
        println!(
            "{width:>5}px  {:<8} display={:<16} direction={:<12} gap={}",
            bp.to_string(),
            render_at_typed(&display, bp, &prefix),
            render_at_typed(&direction, bp, &prefix),
            gap.resolve(bp).map_or("-".to_string(), ToString::to_string),
        );
    }

    let flex = config.layout("flex", &[]);
    let basis = Variable::try_component(&config, &flex, &["basis"])?;
    let mut style = InlineStyle::new();
    basis.apply_breakpoints(
        &mut style,
        &BreakpointSet::builder().default("auto").lg("50%").build(),
        |v| *v,
    );
    println!("style=\"{style}\"");

    // Not built with `config.component`: logged once, then ignored.
    let misspelled = Variable::component(&config, "flex", &["basis"]);
    misspelled.apply(&mut style, "0");
    assert_eq!(style.len(), 2);

    Ok(())
}
