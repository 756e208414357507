// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Demo entry point: every built-in preset animating, a lead-glyph track,
//! and a progress track driven imperatively through a slot handle.

use clap::Parser;
use indicator_text::{
    Content, FramePlacement, IndicatorConfig, Preset, ProgressTrack, TextStyle,
};
use indicator_text_iocraft::{ActivityIndicatorText, IndicatorSlot};
use iocraft::prelude::*;
use std::time::Duration;

/// Muted gray for the demo labels.
const LABEL_GRAY: (u8, u8, u8) = (153, 153, 153);

#[derive(Parser, Debug)]
#[command(name = "indicator-demo")]
#[command(about = "Showcase the built-in activity indicator styles")]
struct Cli {
    /// Seconds to run before exiting
    #[arg(short, long, default_value_t = 12)]
    duration_secs: u64,

    /// Print the preset names and exit
    #[arg(long)]
    list_presets: bool,
}

fn label_style() -> TextStyle {
    TextStyle::default().with_color(LABEL_GRAY.0, LABEL_GRAY.1, LABEL_GRAY.2)
}

fn preset_config(preset: Preset) -> IndicatorConfig {
    IndicatorConfig {
        placeholder: "Loading".into(),
        sequence: preset.into(),
        spacing: 3,
        interval: Duration::from_millis(120),
        style: label_style(),
        ..IndicatorConfig::default()
    }
}

fn plane_config() -> IndicatorConfig {
    IndicatorConfig {
        placeholder: "Loading".into(),
        sequence: ProgressTrack::new(" ", " ", 10).with_lead("🛫").into(),
        spacing: 3,
        interval: Duration::from_millis(100),
        style: label_style(),
        ..IndicatorConfig::default()
    }
}

fn rocket_config() -> IndicatorConfig {
    let track = ProgressTrack::new("·", " ", 15)
        .with_start("🌎")
        .with_end("🌑")
        .with_lead("🚀")
        .with_reach("🏁")
        .with_trailer(|offset, last| {
            format!(" {:.1}% ", (offset as f64 / last as f64) * 100.0)
        });
    IndicatorConfig {
        placeholder: "Downloading".into(),
        sequence: track.into(),
        placement: FramePlacement::LeftCenter,
        spacing: 3,
        interval: Duration::from_millis(150),
        style: label_style(),
    }
}

#[derive(Default, Props)]
struct DemoProps {
    duration_secs: u64,
    progress_slot: IndicatorSlot,
}

#[component]
fn Demo(mut hooks: Hooks, props: &DemoProps) -> impl Into<AnyElement<'static>> {
    let mut should_exit = hooks.use_state(|| false);
    let duration = Duration::from_secs(props.duration_secs);
    hooks.use_future(async move {
        tokio::time::sleep(duration).await;
        should_exit.set(true);
    });
    if *should_exit.read() {
        hooks.use_context_mut::<SystemContext>().exit();
    }

    let slot = props.progress_slot.clone();
    element! {
        View(flex_direction: FlexDirection::Column) {
            Text(content: "")
            #(Preset::ALL.iter().map(|preset| element! {
                ActivityIndicatorText(config: preset_config(*preset), auto_start: true)
            }))
            Text(content: "")
            ActivityIndicatorText(config: plane_config(), auto_start: true)
            Text(content: "")
            ActivityIndicatorText(config: rocket_config(), slot: Some(slot))
        }
    }
}

/// Advance the rocket track through the slot handle, the way an imperative
/// host would drive a declaratively placed indicator.
async fn drive_progress(slot: IndicatorSlot) {
    let mut progress = 0.0f64;
    loop {
        tokio::time::sleep(Duration::from_millis(400)).await;
        let Some(widget) = slot.get() else {
            continue;
        };
        progress = (progress + 0.05).min(1.0);
        widget.set_progress(progress);
        if progress >= 1.0 {
            widget.set_placeholder(Content::plain("Done."));
            break;
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.list_presets {
        for preset in Preset::ALL {
            println!("{}", preset.name());
        }
        return Ok(());
    }

    let slot = IndicatorSlot::new();
    let driver = tokio::spawn(drive_progress(slot.clone()));
    element!(Demo(duration_secs: cli.duration_secs, progress_slot: slot))
        .fullscreen()
        .await?;
    driver.abort();
    Ok(())
}
