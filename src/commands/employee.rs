use crate::{
    db::{db::Db, employees::Employees},
    libs::{
        activity,
        employee::{DutyBoard, DutyStatus, Employee},
        messages::Message,
        schedule::Team,
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args)]
pub struct EmployeeArgs {
    #[command(subcommand)]
    command: Option<EmployeeCommand>,
}

#[derive(Debug, Subcommand)]
enum EmployeeCommand {
    /// Add an employee; prompts for every field not given
    Add {
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        role: Option<String>,
        #[arg(short, long)]
        team: Option<Team>,
        #[arg(short, long)]
        email: Option<String>,
        #[arg(short, long)]
        phone: Option<String>,
        #[arg(short, long)]
        department: Option<String>,
        #[arg(short, long)]
        joined: Option<NaiveDate>,
        #[arg(long)]
        on_duty: bool,
    },
    List,
    Edit {
        id: i64,
    },
    Delete {
        id: i64,
        #[arg(short, long)]
        yes: bool,
    },
    /// Who is on the current shift and who takes the next one
    Board,
}

pub fn cmd(args: EmployeeArgs) -> Result<()> {
    match args.command {
        Some(EmployeeCommand::Add {
            name,
            role,
            team,
            email,
            phone,
            department,
            joined,
            on_duty,
        }) => {
            let mut employee = Employee::new(&name.unwrap_or_default(), &role.unwrap_or_default(), team.unwrap_or(Team::A));
            employee.email = email.unwrap_or_default();
            employee.phone = phone.unwrap_or_default();
            employee.department = department;
            employee.join_date = joined;
            if on_duty {
                employee.status = DutyStatus::OnDuty;
            }
            handle_add(employee, team.is_none())
        }
        Some(EmployeeCommand::List) | None => handle_list(),
        Some(EmployeeCommand::Edit { id }) => handle_edit(id),
        Some(EmployeeCommand::Delete { id, yes }) => handle_delete(id, yes),
        Some(EmployeeCommand::Board) => handle_board(),
    }
}

fn handle_add(mut employee: Employee, ask_team: bool) -> Result<()> {
    if employee.validate().is_err() {
        prompt_missing(&mut employee, ask_team)?;
    }

    if let Err(e) = employee.validate() {
        msg_error!(Message::EmployeeInvalid(e.to_string()));
        return Ok(());
    }

    let id = Employees::new(Db::new()?)
        .with_actor(&activity::current_actor()?)
        .create(&employee)?;
    msg_success!(Message::EmployeeCreated(employee.name, id));
    Ok(())
}

fn handle_list() -> Result<()> {
    let employees = Employees::new(Db::new()?).get_all()?;

    if employees.is_empty() {
        msg_info!(Message::NoEmployees);
        return Ok(());
    }

    msg_print!(Message::EmployeeListHeader, true);
    View::employees(&employees)?;
    Ok(())
}

fn handle_edit(id: i64) -> Result<()> {
    let mut employees = Employees::new(Db::new()?).with_actor(&activity::current_actor()?);
    let mut employee = match employees.get(id)? {
        Some(e) => e,
        None => {
            msg_error!(Message::EmployeeNotFound(id));
            return Ok(());
        }
    };

    msg_print!(Message::EditingEmployee(employee.name.clone()), true);
    prompt_all(&mut employee)?;

    if let Err(e) = employee.validate() {
        msg_error!(Message::EmployeeInvalid(e.to_string()));
        return Ok(());
    }

    employees.update(&employee)?;
    msg_success!(Message::EmployeeUpdated(employee.name));
    Ok(())
}

fn handle_delete(id: i64, yes: bool) -> Result<()> {
    let mut employees = Employees::new(Db::new()?).with_actor(&activity::current_actor()?);
    let employee = match employees.get(id)? {
        Some(e) => e,
        None => {
            msg_error!(Message::EmployeeNotFound(id));
            return Ok(());
        }
    };

    let confirmed = yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteEmployee(employee.name.clone()).to_string())
            .default(false)
            .interact()?;

    if confirmed {
        employees.delete(id)?;
        msg_success!(Message::EmployeeDeleted(employee.name));
    } else {
        msg_info!(Message::OperationCancelled);
    }
    Ok(())
}

fn handle_board() -> Result<()> {
    let employees = Employees::new(Db::new()?).get_all()?;
    let board = DutyBoard::from_roster(&employees);

    if board.current.is_empty() && board.next.is_empty() {
        msg_info!(Message::NoEmployees);
        return Ok(());
    }

    msg_print!(Message::DutyBoardHeader, true);
    View::duty_board(&board)?;
    Ok(())
}

/// Prompts only for fields that are empty.
fn prompt_missing(employee: &mut Employee, ask_team: bool) -> Result<()> {
    let theme = ColorfulTheme::default();

    if employee.name.trim().is_empty() {
        employee.name = Input::with_theme(&theme)
            .with_prompt(Message::PromptEmployeeName.to_string())
            .interact_text()?;
    }
    if employee.role.trim().is_empty() {
        employee.role = Input::with_theme(&theme)
            .with_prompt(Message::PromptEmployeeRole.to_string())
            .interact_text()?;
    }
    if ask_team {
        employee.team = select_team(&theme, employee.team)?;
    }
    if employee.email.trim().is_empty() {
        employee.email = Input::with_theme(&theme)
            .with_prompt(Message::PromptEmployeeEmail.to_string())
            .interact_text()?;
    }
    if employee.phone.trim().is_empty() {
        employee.phone = Input::with_theme(&theme)
            .with_prompt(Message::PromptEmployeePhone.to_string())
            .interact_text()?;
    }
    if employee.join_date.is_none() {
        employee.join_date = Some(prompt_join_date(&theme, Local::now().date_naive())?);
    }
    Ok(())
}

/// Prompts for every editable field, defaulting to the current values.
fn prompt_all(employee: &mut Employee) -> Result<()> {
    let theme = ColorfulTheme::default();

    employee.name = Input::with_theme(&theme)
        .with_prompt(Message::PromptEmployeeName.to_string())
        .default(employee.name.clone())
        .interact_text()?;
    employee.role = Input::with_theme(&theme)
        .with_prompt(Message::PromptEmployeeRole.to_string())
        .default(employee.role.clone())
        .interact_text()?;
    employee.team = select_team(&theme, employee.team)?;

    let status = Select::with_theme(&theme)
        .with_prompt(Message::PromptDutyStatus.to_string())
        .items(DutyStatus::ALL)
        .default(DutyStatus::ALL.iter().position(|s| *s == employee.status).unwrap_or(0))
        .interact()?;
    employee.status = DutyStatus::ALL[status];

    employee.email = Input::with_theme(&theme)
        .with_prompt(Message::PromptEmployeeEmail.to_string())
        .default(employee.email.clone())
        .interact_text()?;
    employee.phone = Input::with_theme(&theme)
        .with_prompt(Message::PromptEmployeePhone.to_string())
        .default(employee.phone.clone())
        .interact_text()?;

    let department: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptEmployeeDepartment.to_string())
        .default(employee.department.clone().unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;
    employee.department = (!department.trim().is_empty()).then(|| department.trim().to_string());

    let joined = employee.join_date.unwrap_or_else(|| Local::now().date_naive());
    employee.join_date = Some(prompt_join_date(&theme, joined)?);
    Ok(())
}

fn select_team(theme: &ColorfulTheme, current: Team) -> Result<Team> {
    let index = Select::with_theme(theme)
        .with_prompt(Message::PromptEmployeeTeam.to_string())
        .items(Team::ALL)
        .default(Team::ALL.iter().position(|t| *t == current).unwrap_or(0))
        .interact()?;
    Ok(Team::ALL[index])
}

fn prompt_join_date(theme: &ColorfulTheme, default: NaiveDate) -> Result<NaiveDate> {
    let date: String = Input::with_theme(theme)
        .with_prompt(Message::PromptJoinDate.to_string())
        .default(default.format("%Y-%m-%d").to_string())
        .validate_with(|input: &String| -> Result<(), String> {
            NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .map(|_| ())
                .map_err(|_| Message::InvalidDateFormat.to_string())
        })
        .interact_text()?;
    Ok(NaiveDate::parse_from_str(&date, "%Y-%m-%d")?)
}
