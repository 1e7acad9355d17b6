//! Seeded mock roster, standing in for a real employee/task source.
//!
//! Every generated record is within the ranges the board validates, and
//! assignments only ever point at generated employees.

use crate::{
    board::Roster,
    employee::{Availability, Employee},
    name_generator::NameGenerator,
    rng::{DeskRng, RngStream},
    task::{Priority, Task, TaskStatus},
    types::Timestamp,
};
use chrono::{DateTime, Duration, Utc};

const EMAIL_DOMAIN: &str = "company.com";
/// Days from the Unix epoch to 2024-01-01, the first creation date.
const FIRST_CREATED_DAY: i64 = 19_723;

const DEPARTMENTS: &[(&str, &[&str])] = &[
    ("Engineering", &["Frontend Developer", "Backend Developer", "DevOps Engineer"]),
    ("Design",      &["UI Designer", "UX Researcher"]),
    ("Product",     &["Product Manager"]),
    ("Marketing",   &["Marketing Specialist", "Content Strategist"]),
    ("Data",        &["Data Analyst", "Data Engineer"]),
];

pub const SKILLS: &[&str] = &[
    "React", "TypeScript", "Node.js", "Python", "AWS", "Docker", "Kubernetes",
    "GraphQL", "SQL", "Go", "Figma", "UI/UX", "Machine Learning", "SEO",
    "Content Writing", "Project Management",
];

// available, busy, unavailable
const AVAILABILITY_WEIGHTS: [f64; 3] = [0.50, 0.35, 0.15];
// pending, in-progress, completed
const STATUS_WEIGHTS: [f64; 3] = [0.40, 0.35, 0.25];
// low, medium, high
const PRIORITY_WEIGHTS: [f64; 3] = [0.30, 0.45, 0.25];

pub struct MockRoster;

impl MockRoster {
    pub fn generate(seed: u64, employee_count: usize, task_count: usize) -> Roster {
        let employees = Self::employees(seed, employee_count);
        let tasks = Self::tasks(seed, task_count, &employees);
        log::debug!(
            "mock roster seed={seed}: {} employees, {} tasks",
            employees.len(),
            tasks.len(),
        );
        Roster { employees, tasks }
    }

    fn employees(seed: u64, count: usize) -> Vec<Employee> {
        let mut rng = DeskRng::for_stream(seed, RngStream::Employees);

        (1..=count)
            .map(|n| {
                let id = format!("emp-{n:03}");
                let name = NameGenerator::generate_full_name(&mut rng);
                let &(department, roles) = rng.pick(DEPARTMENTS);
                let role = rng.pick(roles);
                let skill_count = rng.range_u32(2, 5) as usize;
                let skills = rng
                    .sample(SKILLS, skill_count)
                    .into_iter()
                    .map(|s| s.to_string())
                    .collect();

                let contact = [
                    ("email".to_string(), NameGenerator::email_for(&name, EMAIL_DOMAIN)),
                    ("avatar".to_string(), format!("https://i.pravatar.cc/150?u={id}")),
                ]
                .into();

                Employee {
                    name,
                    contact,
                    department:      department.to_string(),
                    role:            role.to_string(),
                    skills,
                    workload:        rng.range_u32(0, 100),
                    availability:    Availability::ALL[rng.weighted_index(&AVAILABILITY_WEIGHTS)],
                    experience:      rng.range_u32(0, 15),
                    tasks_completed: rng.range_u32(0, 200),
                    productivity:    rng.range_u32(60, 100),
                    id,
                }
            })
            .collect()
    }

    fn tasks(seed: u64, count: usize, employees: &[Employee]) -> Vec<Task> {
        let mut rng = DeskRng::for_stream(seed, RngStream::Tasks);
        let first_created = DateTime::<Utc>::UNIX_EPOCH + Duration::days(FIRST_CREATED_DAY);

        (1..=count)
            .map(|n| {
                let title = NameGenerator::generate_task_title(&mut rng);
                let required_count = rng.range_u32(1, 4) as usize;
                let required_skills: Vec<String> = rng
                    .sample(SKILLS, required_count)
                    .into_iter()
                    .map(|s| s.to_string())
                    .collect();
                let status = TaskStatus::ALL[rng.weighted_index(&STATUS_WEIGHTS)];
                let priority = Priority::ALL[rng.weighted_index(&PRIORITY_WEIGHTS)];

                // Pending tasks are unassigned; everything else has an owner.
                let assigned_to = match status {
                    TaskStatus::Pending => None,
                    _ if employees.is_empty() => None,
                    _ => Some(rng.pick(employees).id.clone()),
                };

                let created_at: Timestamp = first_created + Duration::days(n as i64);
                let deadline = created_at + Duration::days(rng.range_u32(7, 60) as i64);

                Task {
                    id: format!("task-{n:03}"),
                    description: format!(
                        "{title}. Requires {}.",
                        required_skills.join(", ")
                    ),
                    title,
                    priority,
                    status,
                    required_skills,
                    assigned_to,
                    deadline,
                    estimated_hours: rng.range_u32(4, 80) as f64,
                    created_at,
                }
            })
            .collect()
    }
}
