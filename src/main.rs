// Saju Engine - CLI
// Computes a Four Pillars chart for a birth date/time and prints it.
//
// Usage: saju-engine <YYYY-MM-DD> <HH:MM>

use anyhow::{bail, Context, Result};
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use std::env;

use saju_engine::{ProfileRegistry, SajuEngine};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() != 3 {
        eprintln!("Usage: {} <YYYY-MM-DD> <HH:MM>", args[0]);
        eprintln!("Example: {} 1997-05-07 21:30", args[0]);
        bail!("expected a birth date and time");
    }

    let date = NaiveDate::parse_from_str(&args[1], "%Y-%m-%d")
        .with_context(|| format!("'{}' is not a date in YYYY-MM-DD form", args[1]))?;
    let time = NaiveTime::parse_from_str(&args[2], "%H:%M")
        .with_context(|| format!("'{}' is not a time in HH:MM form", args[2]))?;

    run_chart(date, time)
}

fn run_chart(date: NaiveDate, time: NaiveTime) -> Result<()> {
    let engine = SajuEngine::new();
    let profiles = ProfileRegistry::builtin();

    let pillars = engine.compute_four_pillars(
        date.year(),
        date.month(),
        date.day(),
        time.hour(),
        time.minute(),
    )?;
    let element = pillars.day_element();

    println!("🔮 사주 분석 - {} {}", date, time.format("%H:%M"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // 1. Four pillars chart
    println!("\n📅 사주팔자");
    let day_stem = pillars.day.stem_index;
    for (label, pillar, is_day) in [
        ("년주", pillars.year, false),
        ("월주", pillars.month, false),
        ("일주", pillars.day, true),
        ("시주", pillars.hour, false),
    ] {
        let stem_god = if is_day {
            // The day stem is the reference point; it has no self-relation.
            "일간"
        } else {
            engine.compute_ten_god(day_stem, pillar.stem_index).korean()
        };
        let branch_god = engine.compute_branch_ten_god(day_stem, pillar.branch_index);
        println!(
            "  {} {} ({}{})  천간:{}  지지:{}",
            label,
            pillar.display(),
            pillar.stem_hanja(),
            pillar.branch_hanja(),
            stem_god,
            branch_god.korean(),
        );
    }

    // 2. Day element and season
    println!("\n⭐ 일간 오행: {}", element.display_name());
    if let Some(season) = engine.approximate_season(date.month(), date.day()) {
        println!("🍃 절기(근사): {}", season);
    }

    // 3. Element profile
    if let Some(profile) = profiles.get(element) {
        println!("\n{} 성향: {}", profile.emoji, profile.traits.join(", "));
        println!("💪 강점: {}", profile.strengths);
        println!("⚠️  주의점: {}", profile.weaknesses);
        println!("\n📝 {}", profile.description);
    }

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    Ok(())
}
