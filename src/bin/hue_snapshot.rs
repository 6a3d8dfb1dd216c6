//! Command-line viewer for Hue bridge snapshot exports.
//!
//! Reads the JSON files an export pass wrote into a directory and
//! prints the same derived data the dashboard shows: light states and
//! colors, rooms, scene swatches, and dimmer-switch scene cycles.
//!
//! Run with: cargo run --bin hue-snapshot -- --dir config summary

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hue_snapshot_rs::{DEFAULT_SCENE_COLORS, Device, Snapshot};

#[derive(Parser)]
#[command(name = "hue-snapshot")]
#[command(about = "Inspect exported Philips Hue bridge configuration", long_about = None)]
struct Cli {
    /// Directory holding the exported snapshot JSON files
    #[arg(short, long, default_value = "config")]
    dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show counts of lights, rooms, scenes, and switches
    Summary,

    /// List lights with their state and display color
    Lights,

    /// List rooms with their lights and scenes
    Rooms,

    /// List scenes with glyphs and representative colors
    Scenes,

    /// List switches and their resolved scene cycles
    Switches,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let snapshot = Snapshot::load(&cli.dir)?;

    match cli.command {
        Commands::Summary => print_summary(&snapshot),
        Commands::Lights => print_lights(&snapshot),
        Commands::Rooms => print_rooms(&snapshot),
        Commands::Scenes => print_scenes(&snapshot),
        Commands::Switches => print_switches(&snapshot),
    }

    Ok(())
}

fn print_summary(snapshot: &Snapshot) {
    println!(
        "{} lights • {} rooms • {} scenes • {} switches",
        snapshot.lights.len(),
        snapshot.rooms.len(),
        snapshot.scenes.len(),
        snapshot.switches().len(),
    );
}

fn print_lights(snapshot: &Snapshot) {
    let mut lights: Vec<_> = snapshot.lights.values().collect();
    lights.sort_by(|a, b| a.name.cmp(&b.name));

    for light in lights {
        println!(
            "{:30} {:3} {:>4}  {}",
            light.name,
            if light.state.on { "ON" } else { "OFF" },
            light.brightness_label(),
            light.display_color().hex(),
        );
    }
}

fn print_rooms(snapshot: &Snapshot) {
    let mut rooms: Vec<_> = snapshot.rooms.values().collect();
    rooms.sort_by(|a, b| a.name.cmp(&b.name));

    for room in rooms {
        let archetype = room
            .archetype
            .as_ref()
            .map_or_else(|| "room".to_string(), |a| a.to_string().replace('_', " "));
        println!("{} {} ({archetype})", room.glyph(), room.name);

        let mut lights = snapshot.room_lights(room);
        lights.sort_by(|a, b| a.name.cmp(&b.name));
        for light in lights {
            println!(
                "    💡 {:26} {:3} {}",
                light.name,
                if light.state.on { "ON" } else { "OFF" },
                light.display_color().hex(),
            );
        }

        let mut scenes = snapshot.room_scenes(room);
        scenes.sort_by(|a, b| a.name.cmp(&b.name));
        for scene in scenes {
            println!("    {} {}", scene.glyph(), scene.name);
        }
    }
}

fn print_scenes(snapshot: &Snapshot) {
    let mut scenes: Vec<_> = snapshot.scenes.values().collect();
    scenes.sort_by(|a, b| a.name.cmp(&b.name));

    for scene in scenes {
        let swatches: Vec<String> = scene
            .colors(DEFAULT_SCENE_COLORS)
            .iter()
            .map(|rgb| rgb.hex())
            .collect();
        println!(
            "{} {:30} {} light(s)  {}",
            scene.glyph(),
            scene.name,
            scene.light_action_count(),
            swatches.join(" "),
        );
    }
}

fn print_switches(snapshot: &Snapshot) {
    let mut switches: Vec<&Device> = snapshot.switches();
    switches.sort_by(|a, b| a.name.cmp(&b.name));

    for device in switches {
        println!(
            "{} {} ({}, model {})",
            device.glyph(),
            device.name,
            device.product_data.product_name,
            device.product_data.model_id,
        );

        if !device.is_dimmer_switch() {
            continue;
        }
        match snapshot.cycle_for_device(device) {
            Some(cycle) => {
                println!("    ON button cycles through:");
                for (index, step) in cycle.scenes.iter().enumerate() {
                    let stage = if step.order == 0 {
                        "Initial".to_string()
                    } else {
                        format!("Step {}", step.order)
                    };
                    println!("    {}. {} ({stage})", index + 1, step.name);
                }
            }
            None => println!("    No scene cycling configuration found."),
        }
    }
}
