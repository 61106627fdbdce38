use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool, Postgres, Transaction};

#[derive(Debug, Serialize, FromRow)]
pub struct Course {
    pub course_id: i64,
    pub course_name: String,
    pub description: Option<String>,
    pub level: Option<String>,
    pub teacher_id: Option<i64>,
    pub image_url: Option<String>,
    pub duration: Option<String>,
    pub price: Option<f64>,
    pub created_at: DateTime<Utc>,
    /// Joined from teachers, not a courses column
    pub teacher_name: Option<String>,
    #[sqlx(skip)]
    pub schedules: Vec<ClassSchedule>,
}

#[derive(Debug, Serialize, FromRow)]
pub struct ClassSchedule {
    pub schedule_id: i64,
    pub course_id: i64,
    pub teacher_id: Option<i64>,
    pub class_day: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub teacher_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CourseInput {
    pub title: String,
    pub description: Option<String>,
    pub level: Option<String>,
    pub teacher_name: Option<String>,
    pub image_url: Option<String>,
    pub duration: Option<String>,
    pub price: Option<f64>,
    #[serde(default)]
    pub schedules: Vec<ScheduleInput>,
}

/// Schedule rows are skipped (not rejected) when day or times are missing.
#[derive(Debug, Deserialize)]
pub struct ScheduleInput {
    pub class_day: Option<String>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub teacher_id: Option<i64>,
    pub teacher_name: Option<String>,
}

pub async fn get_all(pool: &PgPool) -> Result<Vec<Course>, sqlx::Error> {
    let mut courses = sqlx::query_as::<_, Course>(
        "SELECT c.*, t.full_name AS teacher_name
         FROM courses c
         LEFT JOIN teachers t ON c.teacher_id = t.teacher_id
         ORDER BY c.created_at ASC",
    )
    .fetch_all(pool)
    .await?;

    for course in &mut courses {
        course.schedules = schedules_for(pool, course.course_id).await?;
    }
    Ok(courses)
}

pub async fn get_by_id(pool: &PgPool, course_id: i64) -> Result<Option<Course>, sqlx::Error> {
    let course = sqlx::query_as::<_, Course>(
        "SELECT c.*, t.full_name AS teacher_name
         FROM courses c
         LEFT JOIN teachers t ON c.teacher_id = t.teacher_id
         WHERE c.course_id = $1",
    )
    .bind(course_id)
    .fetch_optional(pool)
    .await?;

    match course {
        Some(mut course) => {
            course.schedules = schedules_for(pool, course_id).await?;
            Ok(Some(course))
        }
        None => Ok(None),
    }
}

async fn schedules_for(pool: &PgPool, course_id: i64) -> Result<Vec<ClassSchedule>, sqlx::Error> {
    sqlx::query_as::<_, ClassSchedule>(
        "SELECT cs.*, t.full_name AS teacher_name
         FROM class_schedules cs
         LEFT JOIN teachers t ON cs.teacher_id = t.teacher_id
         WHERE cs.course_id = $1
         ORDER BY cs.schedule_id ASC",
    )
    .bind(course_id)
    .fetch_all(pool)
    .await
}

/// Course row plus its schedule rows, one transaction.
pub async fn create(pool: &PgPool, input: &CourseInput) -> Result<i64, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let teacher_id = resolve_teacher_id(&mut tx, input.teacher_name.as_deref()).await?;

    let course_id: i64 = sqlx::query_scalar(
        "INSERT INTO courses (course_name, description, level, teacher_id, image_url, duration, price)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         RETURNING course_id",
    )
    .bind(&input.title)
    .bind(&input.description)
    .bind(&input.level)
    .bind(teacher_id)
    .bind(&input.image_url)
    .bind(&input.duration)
    .bind(input.price)
    .fetch_one(&mut *tx)
    .await?;

    insert_schedules(&mut tx, course_id, &input.schedules).await?;

    tx.commit().await?;
    Ok(course_id)
}

/// Replaces the course row and its entire schedule set in one transaction.
pub async fn update(pool: &PgPool, course_id: i64, input: &CourseInput) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let teacher_id = resolve_teacher_id(&mut tx, input.teacher_name.as_deref()).await?;

    let result = sqlx::query(
        "UPDATE courses
         SET course_name = $1,
             description = $2,
             level = $3,
             teacher_id = $4,
             image_url = COALESCE($5, image_url),
             duration = $6,
             price = $7
         WHERE course_id = $8",
    )
    .bind(&input.title)
    .bind(&input.description)
    .bind(&input.level)
    .bind(teacher_id)
    .bind(&input.image_url)
    .bind(&input.duration)
    .bind(input.price)
    .bind(course_id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        tx.rollback().await?;
        return Ok(false);
    }

    sqlx::query("DELETE FROM class_schedules WHERE course_id = $1")
        .bind(course_id)
        .execute(&mut *tx)
        .await?;
    insert_schedules(&mut tx, course_id, &input.schedules).await?;

    tx.commit().await?;
    Ok(true)
}

pub async fn delete(pool: &PgPool, course_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM courses WHERE course_id = $1")
        .bind(course_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

async fn insert_schedules(
    tx: &mut Transaction<'_, Postgres>,
    course_id: i64,
    schedules: &[ScheduleInput],
) -> Result<(), sqlx::Error> {
    for schedule in schedules {
        let (Some(day), Some(start), Some(end)) =
            (&schedule.class_day, schedule.start_time, schedule.end_time)
        else {
            continue;
        };

        let teacher_id = match (schedule.teacher_id, schedule.teacher_name.as_deref()) {
            (Some(id), _) => Some(id),
            (None, name) => resolve_teacher_id(tx, name).await?,
        };

        sqlx::query(
            "INSERT INTO class_schedules (course_id, teacher_id, class_day, start_time, end_time)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(course_id)
        .bind(teacher_id)
        .bind(day)
        .bind(start)
        .bind(end)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

async fn resolve_teacher_id(
    tx: &mut Transaction<'_, Postgres>,
    name: Option<&str>,
) -> Result<Option<i64>, sqlx::Error> {
    let Some(name) = name else { return Ok(None) };
    sqlx::query_scalar("SELECT teacher_id FROM teachers WHERE full_name = $1")
        .bind(name)
        .fetch_optional(&mut **tx)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    // The schedules field is populated by a second query, not the row
    // decoder, but it must still reach the JSON the client sees.
    #[test]
    fn course_json_carries_attached_schedules() {
        let course = Course {
            course_id: 3,
            course_name: "Tabla Intermediate".to_string(),
            description: None,
            level: Some("Intermediate".to_string()),
            teacher_id: Some(2),
            image_url: None,
            duration: Some("3 months".to_string()),
            price: Some(4500.0),
            created_at: Utc::now(),
            teacher_name: Some("Ram Prasad".to_string()),
            schedules: vec![ClassSchedule {
                schedule_id: 9,
                course_id: 3,
                teacher_id: Some(2),
                class_day: "Sunday".to_string(),
                start_time: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
                end_time: NaiveTime::from_hms_opt(8, 30, 0).unwrap(),
                teacher_name: Some("Ram Prasad".to_string()),
            }],
        };

        let value = serde_json::to_value(&course).unwrap();
        assert_eq!(value["course_name"], "Tabla Intermediate");
        assert_eq!(value["schedules"][0]["class_day"], "Sunday");
    }
}
