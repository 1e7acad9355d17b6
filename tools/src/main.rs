//! desk-runner: headless driver for the team desk.
//!
//! Usage:
//!   desk-runner --seed 12345 --employees 12 --tasks 10
//!   desk-runner --roster team.json --data-dir ./data --count 5
//!   desk-runner --seed 12345 --ipc-mode

use anyhow::{Context, Result};
use std::env;
use std::io::{self, BufRead, Write};
use teamdesk_core::{
    config::DeskConfig,
    mock_data::MockRoster,
    query::{EmployeeQuery, StatusCounts, TaskQuery},
    stats::{all_skills, Analytics, DashboardStats},
    Board, Employee, Matcher, Recommendation, Roster, Task, TaskDraft, TaskStatus,
};

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    GetState,
    Recommend {
        task_id: String,
        #[serde(default)]
        count:   Option<usize>,
    },
    Assign {
        task_id:     String,
        employee_id: String,
    },
    SetStatus {
        task_id: String,
        status:  TaskStatus,
    },
    CreateTask(TaskDraft),
    ListEmployees(EmployeeQuery),
    ListTasks(TaskQuery),
    Quit,
}

#[derive(serde::Serialize)]
struct UiState<'a> {
    dashboard:  DashboardStats,
    analytics:  Analytics,
    tab_counts: StatusCounts,
    skills:     Vec<String>,
    events:     usize,
    employees:  &'a [Employee],
    tasks:      &'a [Task],
}

#[derive(serde::Serialize)]
struct RecommendationsReply<'a> {
    task_id:         &'a str,
    recommendations: Vec<Recommendation<'a>>,
}

#[derive(serde::Serialize)]
struct ListReply<'a, T> {
    showing: usize,
    total:   usize,
    items:   Vec<&'a T>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let employee_count = parse_arg(&args, "--employees", 12usize);
    let task_count = parse_arg(&args, "--tasks", 10usize);
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let roster_path = args
        .windows(2)
        .find(|w| w[0] == "--roster")
        .map(|w| w[1].as_str());
    let data_dir = args
        .windows(2)
        .find(|w| w[0] == "--data-dir")
        .map(|w| w[1].as_str())
        .unwrap_or("./data");

    let config = DeskConfig::load(data_dir)?;
    let count = parse_arg(&args, "--count", config.recommendation_count);

    if !ipc_mode {
        println!("Team Desk: desk-runner");
        match roster_path {
            Some(path) => println!("  roster:    {path}"),
            None => println!("  seed:      {seed} ({employee_count} employees, {task_count} tasks)"),
        }
        println!("  data_dir:  {data_dir}");
        println!();
    }

    let roster = match roster_path {
        Some(path) => load_roster(path)?,
        None => MockRoster::generate(seed, employee_count, task_count),
    };
    let matcher = Matcher::new(config.matching.clone())?;
    let mut board = Board::from_roster(roster, matcher)?;

    if ipc_mode {
        run_ipc_loop(&mut board, &config, count)?;
    } else {
        print_summary(&board, &config, count)?;
    }

    Ok(())
}

fn load_roster(path: &str) -> Result<Roster> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Cannot read {path}"))?;
    let roster: Roster =
        serde_json::from_str(&content).with_context(|| format!("Cannot parse {path}"))?;
    log::info!(
        "Loaded roster {path}: {} employees, {} tasks",
        roster.employees.len(),
        roster.tasks.len()
    );
    Ok(roster)
}

fn run_ipc_loop(board: &mut Board, config: &DeskConfig, default_count: usize) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                write_error(&mut stdout, &e.to_string())?;
                continue;
            }
        };

        match handle_command(board, config, default_count, cmd) {
            Ok(Some(reply)) => writeln!(stdout, "{reply}")?,
            Ok(None) => break,
            Err(e) => {
                log::warn!("IPC command failed: {e:#}");
                write_error(&mut stdout, &format!("{e:#}"))?;
            }
        }
        stdout.flush()?;
    }
    Ok(())
}

/// Run one command and render its JSON reply. `None` means quit.
fn handle_command(
    board: &mut Board,
    config: &DeskConfig,
    default_count: usize,
    cmd: IpcCommand,
) -> Result<Option<String>> {
    let reply = match cmd {
        IpcCommand::GetState => serde_json::to_string(&build_ui_state(board, config))?,
        IpcCommand::Recommend { task_id, count } => {
            let recommendations = board.recommend(&task_id, count.unwrap_or(default_count))?;
            serde_json::to_string(&RecommendationsReply { task_id: &task_id, recommendations })?
        }
        IpcCommand::Assign { task_id, employee_id } => {
            let task = board.assign_task(&task_id, &employee_id)?;
            serde_json::to_string(task)?
        }
        IpcCommand::SetStatus { task_id, status } => {
            let task = board.set_status(&task_id, status)?;
            serde_json::to_string(task)?
        }
        IpcCommand::CreateTask(draft) => {
            let task = board.create_task(draft, chrono::Utc::now())?;
            serde_json::to_string(task)?
        }
        IpcCommand::ListEmployees(query) => {
            let items = query.apply(board.employees());
            serde_json::to_string(&ListReply {
                showing: items.len(),
                total:   board.employees().len(),
                items,
            })?
        }
        IpcCommand::ListTasks(query) => {
            let items = query.apply(board.tasks());
            serde_json::to_string(&ListReply {
                showing: items.len(),
                total:   board.tasks().len(),
                items,
            })?
        }
        IpcCommand::Quit => return Ok(None),
    };
    Ok(Some(reply))
}

fn write_error(stdout: &mut io::Stdout, message: &str) -> Result<()> {
    let err_json = serde_json::json!({ "error": message });
    writeln!(stdout, "{err_json}")?;
    stdout.flush()?;
    Ok(())
}

fn build_ui_state<'a>(board: &'a Board, config: &DeskConfig) -> UiState<'a> {
    UiState {
        dashboard:  board.dashboard(config.top_performer_count),
        analytics:  board.analytics(),
        tab_counts: StatusCounts::of(board.tasks()),
        skills:     all_skills(board.employees()),
        events:     board.events().len(),
        employees:  board.employees(),
        tasks:      board.tasks(),
    }
}

fn print_summary(board: &Board, config: &DeskConfig, count: usize) -> Result<()> {
    let stats = board.dashboard(config.top_performer_count);

    println!("=== DASHBOARD ===");
    println!("  employees:       {}", stats.total_employees);
    println!("  tasks:           {}", stats.tasks.all);
    println!("  pending:         {}", stats.tasks.pending);
    println!("  in progress:     {}", stats.tasks.in_progress);
    println!("  completed:       {}", stats.tasks.completed);
    println!("  completion rate: {}%", stats.completion_rate);
    println!(
        "  workload:        {} low / {} medium / {} high",
        stats.workload.low, stats.workload.medium, stats.workload.high
    );

    println!();
    println!("=== TOP PERFORMERS ===");
    for (rank, id) in stats.top_performers.iter().enumerate() {
        let employee = board.employee(id)?;
        println!(
            "  {}. {:<24} {:>3}%  {}",
            rank + 1,
            employee.name,
            employee.productivity,
            employee.role
        );
    }

    println!();
    println!("=== RECOMMENDATIONS (pending tasks) ===");
    let pending = TaskQuery { status: Some(TaskStatus::Pending), ..Default::default() };
    let pending_tasks = pending.apply(board.tasks());
    if pending_tasks.is_empty() {
        println!("  (No pending tasks)");
    }
    for task in pending_tasks {
        println!(
            "  {} [{}] {} (needs {})",
            task.id,
            task.priority.as_str(),
            task.title,
            task.required_skills.join(", ")
        );
        for rec in board.recommend(&task.id, count)? {
            println!(
                "      {:>3}  {:<24} {}",
                rec.score,
                rec.employee.name,
                rec.reasons.join("; ")
            );
        }
    }
    Ok(())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
