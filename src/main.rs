//! hangul-lesson - 게임 캐릭터 이름으로 배우는 한글 발음
//!
//! Usage:
//!   hangul-lesson analyze <HANGUL> <REFERENCE> [--json]
//!   hangul-lesson points <HANGUL> <REFERENCE>
//!   hangul-lesson stages
//!   hangul-lesson practice <STAGE_ID> [--roster PATH] [--count N]
//!   hangul-lesson lessons <STAGE_ID> [--roster PATH]
//!   hangul-lesson next-lesson [--completed ID,ID..] [--level LEVEL]

use std::io::{self, Write};
use std::process;

use hangul_lesson::config::{load_config, LessonConfig};
use hangul_lesson::learning::{
    curriculum, generate_learning_points, generate_practice_items, lessons_for_stage, next_lesson,
    practice_count, stage, Level, LessonModule,
};
use hangul_lesson::roster::Roster;
use hangul_lesson::{analyze, explain};

fn print_help() {
    println!("hangul-lesson: Learn Hangul pronunciation from game character names.");
    println!();
    println!("Usage:");
    println!("  hangul-lesson analyze <HANGUL> <REFERENCE> [--json]");
    println!("  hangul-lesson points <HANGUL> <REFERENCE>");
    println!("  hangul-lesson stages");
    println!("  hangul-lesson practice <STAGE_ID> [--roster PATH] [--count N]");
    println!("  hangul-lesson lessons <STAGE_ID> [--roster PATH]");
    println!("  hangul-lesson next-lesson [--completed ID,ID..] [--level LEVEL]");
    println!();
    println!("Options:");
    println!("  --json           Print the analysis as JSON");
    println!("  --roster PATH    Character roster JSON (overrides the config file)");
    println!("  --count N        Number of practice items (default depends on level)");
    println!("  --completed IDS  Comma-separated lesson module ids already finished");
    println!("  --level LEVEL    Level for next-lesson (default from the config file)");
    println!("  -h, --help       Print this help");
}

fn fatal(msg: &str) -> ! {
    eprintln!("error: {}", msg);
    process::exit(1);
}

/// `--name VALUE` 형식의 옵션 값 꺼내기
fn take_option(args: &mut Vec<String>, name: &str) -> Option<String> {
    let pos = args.iter().position(|a| a == name)?;
    if pos + 1 >= args.len() {
        fatal(&format!("{} requires a value", name));
    }
    let value = args.remove(pos + 1);
    args.remove(pos);
    Some(value)
}

fn take_flag(args: &mut Vec<String>, name: &str) -> bool {
    match args.iter().position(|a| a == name) {
        Some(pos) => {
            args.remove(pos);
            true
        }
        None => false,
    }
}

/// 위치 인자 두 개 (한글 이름, 참조 이름)
fn name_pair(args: &[String]) -> (&str, &str) {
    match args {
        [hangul, reference, ..] => (hangul.as_str(), reference.as_str()),
        [hangul] => (hangul.as_str(), ""),
        [] => fatal("missing <HANGUL> argument"),
    }
}

fn run_analyze(mut args: Vec<String>, config: &LessonConfig) -> io::Result<()> {
    let as_json = take_flag(&mut args, "--json");
    let (hangul, reference) = name_pair(&args);
    let analysis = analyze(hangul, reference);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if as_json {
        let json = serde_json::to_string_pretty(&analysis)
            .unwrap_or_else(|e| fatal(&format!("failed to serialize analysis: {}", e)));
        writeln!(out, "{}", json)?;
        return Ok(());
    }

    let mut lines = explain(&analysis);
    if let Some(overview) = lines.next() {
        writeln!(out, "{}", overview)?;
    }
    if config.show_explanation {
        for line in lines {
            writeln!(out, "  {}", line)?;
        }
    }
    Ok(())
}

fn run_points(args: Vec<String>, config: &LessonConfig) -> io::Result<()> {
    let (hangul, reference) = name_pair(&args);
    let analysis = analyze(hangul, reference);
    let points = generate_learning_points(&analysis, config.max_learning_points);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for point in points {
        writeln!(out, "[{:?}] {}", point.kind, point.title)?;
        writeln!(out, "  {}", point.description)?;
        for example in &point.examples {
            writeln!(out, "  e.g. {}", example)?;
        }
    }
    Ok(())
}

fn run_stages() -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for s in curriculum() {
        writeln!(out, "{} [{}] {}", s.id, s.level, s.name)?;
        writeln!(out, "  {}", s.description)?;
        if !s.prerequisites.is_empty() {
            writeln!(out, "  requires: {}", s.prerequisites.join(", "))?;
        }
    }
    Ok(())
}

fn run_practice(mut args: Vec<String>, config: &LessonConfig) -> io::Result<()> {
    let roster_path = take_option(&mut args, "--roster").or_else(|| config.roster_path.clone());
    let count = take_option(&mut args, "--count").map(|c| {
        c.parse::<usize>()
            .unwrap_or_else(|_| fatal(&format!("invalid --count value: {}", c)))
    });

    let Some(stage_id) = args.first() else {
        fatal("missing <STAGE_ID> argument");
    };
    let stage = stage(stage_id).unwrap_or_else(|| fatal(&format!("unknown stage: {}", stage_id)));

    let Some(roster_path) = roster_path else {
        fatal("no roster given; pass --roster PATH or set roster_path in the config file");
    };
    let roster = Roster::load(&roster_path).unwrap_or_else(|e| fatal(&e.to_string()));

    let count = count.unwrap_or_else(|| practice_count(stage.level));
    let mut rng = rand::thread_rng();
    let items = generate_practice_items(&roster, &stage.focus_areas, stage.level, count, &mut rng);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    if items.is_empty() {
        writeln!(out, "No characters in the roster match {}.", stage.id)?;
        return Ok(());
    }
    for (n, item) in items.iter().enumerate() {
        writeln!(out, "{}. {} {}", n + 1, item.question, item.character_name)?;
        for option in &item.options {
            writeln!(out, "   - {}", option)?;
        }
        writeln!(out, "   answer: {}", item.correct_answer)?;
    }
    Ok(())
}

fn write_module(out: &mut impl Write, module: &LessonModule) -> io::Result<()> {
    writeln!(
        out,
        "{} {} ({} min, pass {}%)",
        module.id, module.title, module.estimated_minutes, module.required_score
    )?;
    writeln!(out, "  {}", module.description)?;
    for objective in module.objectives {
        writeln!(out, "  * {}", objective)?;
    }
    for content in module.content {
        writeln!(out, "  {}: {}", content.title, content.body)?;
        for ex in content.examples {
            writeln!(out, "    {} ({}, {})", ex.korean, ex.romanization, ex.meaning)?;
        }
    }
    Ok(())
}

fn run_lessons(mut args: Vec<String>, config: &LessonConfig) -> io::Result<()> {
    let roster_path = take_option(&mut args, "--roster").or_else(|| config.roster_path.clone());
    let Some(stage_id) = args.first() else {
        fatal("missing <STAGE_ID> argument");
    };
    if stage(stage_id).is_none() {
        fatal(&format!("unknown stage: {}", stage_id));
    }

    // 이름 목록이 없으면 레슨 내용만 보여준다
    let roster = match roster_path {
        Some(path) => Roster::load(&path).unwrap_or_else(|e| fatal(&e.to_string())),
        None => Roster::default(),
    };
    let mut rng = rand::thread_rng();
    let lessons = lessons_for_stage(stage_id, &roster, &mut rng);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    if lessons.is_empty() {
        writeln!(out, "No lesson content for {} yet.", stage_id)?;
        return Ok(());
    }
    for lesson in &lessons {
        write_module(&mut out, lesson.module)?;
        if !lesson.practice_items.is_empty() {
            writeln!(out, "  practice: {} items", lesson.practice_items.len())?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn run_next_lesson(mut args: Vec<String>, config: &LessonConfig) -> io::Result<()> {
    let completed = take_option(&mut args, "--completed").unwrap_or_default();
    let completed: Vec<&str> = completed
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .collect();
    let level = match take_option(&mut args, "--level") {
        Some(l) => Level::parse(&l).unwrap_or_else(|| fatal(&format!("unknown level: {}", l))),
        None => config.level,
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    match next_lesson(&completed, level) {
        Some(module) => write_module(&mut out, module)?,
        None => writeln!(out, "No remaining {} lessons.", level)?,
    }
    Ok(())
}

fn main() {
    // 로깅 초기화 (기본 warn, RUST_LOG로 조절)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() || args.iter().any(|a| a == "-h" || a == "--help") {
        print_help();
        return;
    }

    let config = load_config();
    let command = args.remove(0);

    let result = match command.as_str() {
        "analyze" => run_analyze(args, &config),
        "points" => run_points(args, &config),
        "stages" => run_stages(),
        "practice" => run_practice(args, &config),
        "lessons" => run_lessons(args, &config),
        "next-lesson" => run_next_lesson(args, &config),
        other => fatal(&format!("unknown command: {} (see --help)", other)),
    };

    if let Err(e) = result {
        log::error!("출력 실패: {}", e);
        process::exit(1);
    }
}
