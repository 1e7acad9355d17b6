//! Dashboard and analytics aggregates.

use chrono::{TimeZone, Utc};
use teamdesk_core::{
    stats::{all_skills, top_performers, Analytics, DashboardStats, WorkloadBands},
    Availability, Employee, Priority, Task, TaskStatus,
};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn employee(id: &str, department: &str, skills: &[&str], workload: u32, productivity: u32) -> Employee {
    Employee {
        id: id.into(),
        name: format!("{id} Lastname"),
        contact: Default::default(),
        department: department.into(),
        role: "Staff".into(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        workload,
        availability: Availability::Available,
        experience: 3,
        tasks_completed: workload / 2,
        productivity,
    }
}

fn task(id: &str, status: TaskStatus, priority: Priority) -> Task {
    Task {
        id: id.into(),
        title: id.into(),
        description: String::new(),
        priority,
        status,
        required_skills: vec!["React".into()],
        assigned_to: None,
        deadline: Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
        estimated_hours: 5.0,
        created_at: Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap(),
    }
}

fn staff() -> Vec<Employee> {
    vec![
        employee("Ann", "Engineering", &["React", "Node"], 39, 92),
        employee("Ben", "Design", &["Figma", "React"], 40, 88),
        employee("Cat", "Engineering", &["Node", "Go"], 69, 95),
        employee("Dan", "Data", &["SQL", "Python", "React"], 70, 92),
        employee("Eve", "Engineering", &["Go"], 100, 70),
        employee("Fay", "Design", &["Figma"], 0, 60),
    ]
}

fn backlog() -> Vec<Task> {
    vec![
        task("t1", TaskStatus::Completed, Priority::High),
        task("t2", TaskStatus::Pending, Priority::Low),
        task("t3", TaskStatus::InProgress, Priority::High),
        task("t4", TaskStatus::Pending, Priority::Medium),
        task("t5", TaskStatus::Pending, Priority::High),
        task("t6", TaskStatus::Pending, Priority::Low),
        task("t7", TaskStatus::Completed, Priority::Medium),
    ]
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[test]
fn dashboard_counts_and_rate() {
    let stats = DashboardStats::compute(&staff(), &backlog());

    assert_eq!(stats.total_employees, 6);
    assert_eq!(stats.tasks.all, 7);
    assert_eq!(stats.tasks.completed, 2);
    assert_eq!(stats.tasks.pending, 4);
    assert_eq!(stats.tasks.in_progress, 1);
    // 2 / 7 = 28.57%
    assert_eq!(stats.completion_rate, 29);
    assert_eq!(stats.recent_pending, vec!["t2", "t4", "t5"]);
}

#[test]
fn empty_board_has_zero_completion_rate() {
    let stats = DashboardStats::compute(&[], &[]);
    assert_eq!(stats.completion_rate, 0);
    assert!(stats.top_performers.is_empty());
    assert!(stats.recent_pending.is_empty());
}

#[test]
fn workload_band_edges() {
    assert_eq!(
        WorkloadBands::of(&staff()),
        WorkloadBands { low: 2, medium: 2, high: 2 }
    );
}

#[test]
fn top_performers_by_productivity_with_stable_ties() {
    let staff = staff();
    let top: Vec<&str> = top_performers(&staff, 3).iter().map(|e| e.id.as_str()).collect();
    assert_eq!(top, vec!["Cat", "Ann", "Dan"]);

    let stats = DashboardStats::compute(&staff, &[]);
    assert_eq!(stats.top_performers.len(), 5);
}

#[test]
fn analytics_distributions() {
    let analytics = Analytics::compute(&staff(), &backlog());

    let departments: Vec<(&str, usize)> = analytics
        .departments
        .iter()
        .map(|d| (d.label.as_str(), d.count))
        .collect();
    assert_eq!(departments, vec![("Engineering", 3), ("Design", 2), ("Data", 1)]);

    let skills: Vec<(&str, usize)> = analytics
        .top_skills
        .iter()
        .map(|s| (s.label.as_str(), s.count))
        .collect();
    assert_eq!(
        skills,
        vec![
            ("React", 3),
            ("Node", 2),
            ("Figma", 2),
            ("Go", 2),
            ("SQL", 1),
            ("Python", 1),
        ]
    );

    let statuses: Vec<usize> = analytics.statuses.iter().map(|s| s.count).collect();
    assert_eq!(statuses, vec![4, 1, 2]);
    assert_eq!(analytics.statuses[1].label, "in-progress");

    let priorities: Vec<usize> = analytics.priorities.iter().map(|p| p.count).collect();
    assert_eq!(priorities, vec![2, 2, 3]);

    assert_eq!(analytics.workloads[0].name, "Ann");
    assert_eq!(analytics.workloads[4].workload, 100);
    assert_eq!(analytics.workloads[4].tasks_completed, 50);
}

#[test]
fn skill_catalogue_is_distinct_in_first_seen_order() {
    assert_eq!(
        all_skills(&staff()),
        vec!["React", "Node", "Figma", "Go", "SQL", "Python"]
    );
}
