//! Card component for course catalog lists.

use leptos::prelude::*;

use crate::net::types::Course;

/// A clickable card representing one course in the catalog.
#[component]
pub fn CourseCard(course: Course) -> impl IntoView {
    let href = format!("/courses/{}", course.id);
    let teacher = course
        .teacher_name
        .clone()
        .or_else(|| course.teacher.as_ref().map(|t| t.username.clone()))
        .unwrap_or_else(|| "-".to_owned());
    let category = course.category.as_ref().map(|c| c.name.clone());

    view! {
        <a class="course-card" href=href>
            <span class="course-card__title">{course.title.clone()}</span>
            <span class="course-card__teacher">{"授课教师："}{teacher}</span>
            {category.map(|name| view! { <span class="course-card__category">{name}</span> })}
            <p class="course-card__description">
                {course.description.clone().unwrap_or_default()}
            </p>
        </a>
    }
}
