use std::env;
use std::fs;
use std::process;

use chordshift::{song_to_chord_text, transpose_song, Direction, Song, SongTransposeResult};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage_and_exit();
    }

    let mut direction = Direction::None;
    let mut target_key: Option<String> = None;
    let mut text_output = false;
    let mut paths: Vec<&String> = Vec::new();

    // Parse flags
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--up" => direction = Direction::Up,
            "--down" => direction = Direction::Down,
            "--text" => text_output = true,
            "--key" => {
                i += 1;
                match args.get(i) {
                    Some(key) => target_key = Some(key.clone()),
                    None => {
                        eprintln!("--key requires a target key argument");
                        process::exit(1);
                    }
                }
            }
            _ => paths.push(&args[i]),
        }
        i += 1;
    }

    let Some(input_path) = paths.first() else {
        print_usage_and_exit();
    };
    let output_path = paths.get(1);

    // Read input file
    let source = match fs::read_to_string(input_path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", input_path, e);
            process::exit(1);
        }
    };

    let song = match parse_song(input_path, &source) {
        Ok(song) => song,
        Err(message) => {
            eprintln!("Error parsing '{}': {}", input_path, message);
            process::exit(1);
        }
    };

    // Transpose
    let result = match transpose_song(&song, direction, target_key.as_deref()) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Transposition error: {}", e);
            process::exit(1);
        }
    };

    let output = if text_output {
        render_text(&result)
    } else {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("Error serializing result: {}", e);
                process::exit(1);
            }
        }
    };

    // Output
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &output) {
                eprintln!("Error writing to '{}': {}", path, e);
                process::exit(1);
            }
            eprintln!("Wrote transposed song to {}", path);
        }
        None => {
            println!("{}", output);
        }
    }
}

/// Parse a song document: YAML for .yaml/.yml files, JSON otherwise.
fn parse_song(path: &str, source: &str) -> Result<Song, String> {
    if path.ends_with(".yaml") || path.ends_with(".yml") {
        serde_yaml::from_str(source).map_err(|e| e.to_string())
    } else {
        serde_json::from_str(source).map_err(|e| e.to_string())
    }
}

/// Chords-over-lyrics text for a transposed song, headed by the new key.
fn render_text(result: &SongTransposeResult) -> String {
    let song = Song {
        title: result.title.clone(),
        artist: result.artist.clone(),
        key: result.transposed_key.clone(),
        tempo: None,
        time_signature: None,
        lyrics: result.transposed_lyrics.clone(),
    };
    song_to_chord_text(&song)
}

fn print_usage_and_exit() -> ! {
    eprintln!("Usage: chordshift <song.json|song.yaml> [--up | --down | --key <KEY>] [--text] [output]");
    process::exit(1);
}
