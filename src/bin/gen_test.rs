//! Stress-test export generator for chatconv.
//!
//! Usage: cargo run --features gen-test --bin gen_test -- [messages] [output]
//! Example: cargo run --features gen-test --bin gen_test -- 100000 heavy_chat.txt

use rand::Rng;
use rand::seq::SliceRandom;
use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

const SENDERS: &[&str] = &[
    "Aditya",
    "Ronak",
    "aditya",
    "Иван",
    "村上",
    "محمد",
    "User, With, Commas",
    "User\"With\"Quotes",
    "Mary - Jane",
    "🔥FireUser🔥",
];

const SYSTEM_LINES: &[&str] = &[
    "Messages and calls are end-to-end encrypted. No one outside of this chat can read them.",
    "Aditya created group \"Weekend plans\"",
    "Ronak added Aditya",
    "Your security code with Ronak changed.",
    "You deleted this message",
];

const EMOJIS: &[&str] = &[
    "😀", "😂", "🤣", "😍", "🤔", "🙄", "😱", "🤯", "💀", "👻", "🤖", "🦄", "🌈", "⚡", "🔥",
    "👍", "❤️", "🏳️‍🌈", "🇰🇿", "👨‍👩‍👧‍👦", "🤷‍♀️",
];

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let output = args.get(2).map(String::as_str).unwrap_or("heavy_chat.txt");

    println!("🧪 Export Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Messages: {}", count);
    println!("   Output:   {}", output);
    println!();

    let file = File::create(output)?;
    let mut writer = BufWriter::with_capacity(1024 * 1024, file);

    let mut rng = rand::thread_rng();
    let start = Instant::now();
    let mut bytes_written: usize = 0;

    for i in 0..count {
        let timestamp = format!(
            "{}/{}/24, {}:{:02} {}",
            (i % 12) + 1,
            (i % 28) + 1,
            (i % 12) + 1,
            i % 60,
            if i % 2 == 0 { "AM" } else { "PM" }
        );

        let line = if i % 50 == 7 {
            let system = SYSTEM_LINES.choose(&mut rng).copied().unwrap_or_default();
            format!("{} - {}\n", timestamp, system)
        } else {
            let sender = SENDERS.choose(&mut rng).copied().unwrap_or("Aditya");
            let body = generate_body(&mut rng, i);
            format!("{} - {}: {}\n", timestamp, sender, body)
        };

        bytes_written += line.len();
        writer.write_all(line.as_bytes())?;

        // Lines the parser must skip
        if i % 1000 == 500 {
            let garbage = generate_garbage_line(&mut rng);
            bytes_written += garbage.len();
            writer.write_all(garbage.as_bytes())?;
        }

        if (i + 1) % 10000 == 0 {
            let elapsed = start.elapsed().as_secs_f64();
            eprint!(
                "\r   Generated {}/{} ({:.1} MB, {:.0} msg/s)",
                i + 1,
                count,
                bytes_written as f64 / 1_000_000.0,
                (i + 1) as f64 / elapsed
            );
        }
    }

    writer.flush()?;

    let elapsed = start.elapsed();
    println!("\n\n✅ Done!");
    println!("   Size: {:.2} MB", bytes_written as f64 / 1_000_000.0);
    println!("   Time: {:.2}s", elapsed.as_secs_f64());
    Ok(())
}

fn generate_body(rng: &mut impl Rng, index: usize) -> String {
    match index % 16 {
        0..=5 => format!("Normal message #{} with some text", index),

        // Separators inside the body
        6 => format!("note: remember: milk #{}", index),
        7 => format!("a - b - c #{}", index),

        // CSV-significant characters
        8 => format!("Commas, \"quotes\" and 'apostrophes' #{}", index),

        // HTML-significant characters
        9 => format!("<b>bold</b> & <script>alert({})</script>", index),

        10 => {
            let emojis: String = (0..30)
                .map(|_| EMOJIS.choose(rng).copied().unwrap_or("🙂"))
                .collect();
            format!("Emoji spam: {} #{}", emojis, index)
        }

        11 => format!("Кириллица: Привет мир! #{}", index),
        12 => format!("日本語: こんにちは #{}", index),
        13 => format!("Mixed: Hello Привет 你好 🌍 #{}", index),

        // Giant message
        14 => {
            let len = rng.gen_range(10_000..50_000);
            format!("Giant message #{}: {}", index, "X".repeat(len))
        }

        _ => "<Media omitted>".to_string(),
    }
}

fn generate_garbage_line(rng: &mut impl Rng) -> String {
    match rng.gen_range(0..4) {
        0 => "This line has no timestamp separator\n".to_string(),
        1 => "-------------------------------------------\n".to_string(),
        2 => "\n".to_string(),
        _ => "☠️💀👻 continuation of the previous message 👻💀☠️\n".to_string(),
    }
}
