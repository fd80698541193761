use super::activity_logs::ActivityLogs;
use super::db::Db;
use super::text_column;
use crate::libs::activity::DEFAULT_ACTOR;
use crate::libs::employee::Employee;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};

const INSERT_EMPLOYEE: &str = "INSERT INTO employees (name, role, team, status, monthly_hours, total_hours, email, phone, department, join_date)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)";
const UPDATE_EMPLOYEE: &str = "UPDATE employees SET name = ?2, role = ?3, team = ?4, status = ?5, monthly_hours = ?6,
    total_hours = ?7, email = ?8, phone = ?9, department = ?10, join_date = ?11 WHERE id = ?1";
const DELETE_EMPLOYEE: &str = "DELETE FROM employees WHERE id = ?1";
const SELECT_EMPLOYEES: &str = "SELECT id, name, role, team, status, monthly_hours, total_hours, email, phone, department, join_date FROM employees";
const WHERE_ID: &str = "WHERE id = ?1";
const ORDER_BY_NAME: &str = "ORDER BY name, id";
const COUNT_EMPLOYEES: &str = "SELECT COUNT(*) FROM employees";

/// The roster. Create, update and delete are noted in the activity trail.
pub struct Employees {
    conn: Connection,
    actor: String,
}

impl Employees {
    pub fn new(db: Db) -> Self {
        Self {
            conn: db.conn,
            actor: DEFAULT_ACTOR.to_string(),
        }
    }

    pub fn with_actor(mut self, actor: &str) -> Self {
        self.actor = actor.to_string();
        self
    }

    /// Validates and stores a new employee.
    pub fn create(&mut self, employee: &Employee) -> Result<i64> {
        employee.validate()?;
        Self::insert_on(&self.conn, employee)?;
        let id = self.conn.last_insert_rowid();
        ActivityLogs::note_edit(&self.conn, &self.actor, &format!("Added employee {}", employee.name));
        Ok(id)
    }

    pub fn update(&mut self, employee: &Employee) -> Result<()> {
        let id = employee.id.ok_or_else(|| msg_error_anyhow!(Message::EmployeeIdMissing))?;
        employee.validate()?;

        let affected = self.conn.execute(
            UPDATE_EMPLOYEE,
            params![
                id,
                employee.name,
                employee.role,
                employee.team.as_str(),
                employee.status.as_str(),
                employee.monthly_hours,
                employee.total_hours,
                employee.email,
                employee.phone,
                employee.department,
                employee.join_date,
            ],
        )?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::EmployeeNotFound(id)));
        }
        ActivityLogs::note_edit(&self.conn, &self.actor, &format!("Updated employee {}", employee.name));
        Ok(())
    }

    pub fn delete(&mut self, id: i64) -> Result<()> {
        let affected = self.conn.execute(DELETE_EMPLOYEE, params![id])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::EmployeeNotFound(id)));
        }
        ActivityLogs::note_edit(&self.conn, &self.actor, &format!("Removed employee #{id}"));
        Ok(())
    }

    pub fn get(&self, id: i64) -> Result<Option<Employee>> {
        let employee = self
            .conn
            .query_row(&format!("{} {}", SELECT_EMPLOYEES, WHERE_ID), params![id], Self::map_row)
            .optional()?;
        Ok(employee)
    }

    pub fn get_all(&self) -> Result<Vec<Employee>> {
        let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_EMPLOYEES, ORDER_BY_NAME))?;
        let employees = stmt.query_map([], Self::map_row)?.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(employees)
    }

    /// Stores the hours worked this month for the employee called `name`.
    ///
    /// Returns false when nobody on the roster has that name.
    pub fn set_monthly_hours(&mut self, name: &str, hours: u32) -> Result<bool> {
        let affected = self
            .conn
            .execute("UPDATE employees SET monthly_hours = ?2 WHERE name = ?1", params![name, hours])?;
        Ok(affected > 0)
    }

    /// Writes a starter roster when the table is empty. Seed rows skip
    /// validation so partial demo data is accepted.
    pub fn seed_if_empty(&mut self, employees: &[Employee]) -> Result<usize> {
        let count: i64 = self.conn.query_row(COUNT_EMPLOYEES, [], |row| row.get(0))?;
        if count > 0 {
            return Ok(0);
        }

        let tx = self.conn.transaction()?;
        for employee in employees {
            Self::insert_on(&tx, employee)?;
        }
        tx.commit()?;
        Ok(employees.len())
    }

    fn insert_on(conn: &Connection, employee: &Employee) -> Result<()> {
        conn.execute(
            INSERT_EMPLOYEE,
            params![
                employee.name,
                employee.role,
                employee.team.as_str(),
                employee.status.as_str(),
                employee.monthly_hours,
                employee.total_hours,
                employee.email,
                employee.phone,
                employee.department,
                employee.join_date,
            ],
        )?;
        Ok(())
    }

    fn map_row(row: &Row) -> rusqlite::Result<Employee> {
        Ok(Employee {
            id: row.get(0)?,
            name: row.get(1)?,
            role: row.get(2)?,
            team: text_column(row, 3)?,
            status: text_column(row, 4)?,
            monthly_hours: row.get(5)?,
            total_hours: row.get(6)?,
            email: row.get(7)?,
            phone: row.get(8)?,
            department: row.get(9)?,
            join_date: row.get(10)?,
        })
    }
}
