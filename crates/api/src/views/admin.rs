//! `/admin` page: project form above the project table.

use folio_db::models::project::Project;

use super::{escape, layout, notices};
use crate::controllers::{AdminController, FormController, ListController};

pub const EMPTY_STATE: &str = "No projects found. Add your first project using the form above.";

pub fn render(admin: &AdminController) -> String {
    let shown: Vec<_> = admin.notices().iter().collect();
    let body = format!(
        "{header}\n{notices}\n<main class=\"admin\">\n<h1>Portfolio Admin</h1>\n{form}\n{table}\n</main>",
        header = layout::header(true),
        notices = notices(&shown),
        form = project_form(admin.form()),
        table = project_table(admin.list()),
    );
    layout::page("Portfolio Admin | nova.", &body)
}

fn project_form(form: &FormController) -> String {
    let draft = form.draft();
    let editing = form.is_editing();
    let (heading, submit, busy) = if editing {
        ("Edit Project", "Update Project", "Updating...")
    } else {
        ("Add New Project", "Create Project", "Creating...")
    };

    format!(
        r#"<section class="card">
<h2>{heading}</h2>
<form method="post" action="/admin/projects" data-submit-once>
<input type="hidden" name="id" value="{id}">
<label for="title">Title*</label>
<input type="text" id="title" name="title" required value="{title}">
<label for="category">Category*</label>
<input type="text" id="category" name="category" required value="{category}">
<label for="description">Description*</label>
<textarea id="description" name="description" rows="4" required>{description}</textarea>
<label for="image_url">Image URL</label>
<input type="url" id="image_url" name="image_url" placeholder="https://..." value="{image_url}">
<div class="actions">
<a href="/admin" class="button button-outline">Cancel</a>
<button type="submit" class="button" data-busy-label="{busy}">{submit}</button>
</div>
</form>
</section>"#,
        id = escape(&draft.id),
        title = escape(&draft.title),
        category = escape(&draft.category),
        description = escape(&draft.description),
        image_url = escape(&draft.image_url),
    )
}

fn project_table(list: &ListController) -> String {
    let content = if list.is_loading() {
        r#"<div class="spinner" aria-label="Loading"></div>"#.to_string()
    } else if list.projects().is_empty() {
        format!(r#"<p class="empty-state">{EMPTY_STATE}</p>"#)
    } else {
        let rows: String = list.projects().iter().map(project_row).collect();
        format!(
            "<table>\n<thead><tr><th>Project</th><th>Category</th><th>Created</th><th>Actions</th></tr></thead>\n<tbody>\n{rows}</tbody>\n</table>"
        )
    };
    format!("<section class=\"card\">\n<h2>All Projects</h2>\n{content}\n</section>")
}

fn project_row(project: &Project) -> String {
    let id = escape(&project.id);
    format!(
        r#"<tr>
<td><img src="{src}" alt="" class="thumb"><span class="title">{title}</span></td>
<td>{category}</td>
<td>{created}</td>
<td class="actions">
<a href="/admin?edit={id}" class="button button-small">Edit</a>
<form method="post" action="/admin/projects/{id}/delete" data-confirm="Are you sure you want to delete this project?">
<input type="hidden" name="confirmed" value="false">
<button type="submit" class="button button-small button-danger">Delete</button>
</form>
</td>
</tr>
"#,
        src = escape(project.image_src()),
        title = escape(&project.title),
        category = escape(project.category.as_deref().unwrap_or_default()),
        created = project.created_at.format("%Y-%m-%d"),
    )
}
