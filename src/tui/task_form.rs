//! Capture form handling for the terminal user interface.
//!
//! This module provides the `TaskForm` structure for creating new tasks
//! in the TUI, including field ordering, the pending-tag buffer and the
//! required-field validation that runs on submit.

use crate::{
    fields::{Priority, Status},
    task::Task,
    tui::input::InputField,
};

/// Order constants for the capture form fields, left column then right.
pub const TITLE_FIELD: usize = 0;
pub const DESCRIPTION_FIELD: usize = 1;
pub const SECTOR_FIELD: usize = 2;
pub const ASSIGNEE_FIELD: usize = 3;
pub const DUE_FIELD: usize = 4;
pub const PRIORITY_FIELD: usize = 5;
pub const TAGS_FIELD: usize = 6;

/// Sector options shown in the suggestion row.
pub const SECTOR_SUGGESTIONS: [&str; 5] = [
    "Tecnologia da Informação",
    "Administrativo",
    "Financeiro",
    "Operacional",
    "Comunicação",
];

/// Team members shown in the suggestion row.
pub const ASSIGNEE_SUGGESTIONS: [&str; 5] = ["Ana", "Bruno", "Carla", "Diego", "Elena"];

/// Validation outcome, one message slot per required field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub title: Option<&'static str>,
    pub sector: Option<&'static str>,
    pub assignee: Option<&'static str>,
    pub due_date: Option<&'static str>,
}

impl FormErrors {
    /// Whether any required field is still missing.
    pub fn any(&self) -> bool {
        self.title.is_some()
            || self.sector.is_some()
            || self.assignee.is_some()
            || self.due_date.is_some()
    }
}

/// Capture form for new tasks.
///
/// Field text is taken verbatim; the only transformations happen in
/// [`TaskForm::commit_tag`] (trims the pending tag) and
/// [`TaskForm::build_task`] (upper-cases the sector).
pub struct TaskForm {
    pub title: InputField,
    pub description: InputField,
    pub sector: InputField,
    pub assignee: InputField,
    pub due_date: InputField,
    pub tag_input: InputField,
    pub tags: Vec<String>,
    pub tag_cursor: usize,
    pub priority: usize,
    pub priorities: Vec<Priority>,
    pub current_field: usize,
    pub errors: FormErrors,
}

impl TaskForm {
    /// Create a fresh capture form: Média priority, the two sample tags
    /// the screen starts with, everything else empty.
    pub fn new() -> Self {
        let mut form = Self {
            title: InputField::new(),
            description: InputField::new(),
            sector: InputField::new(),
            assignee: InputField::new(),
            due_date: InputField::new(),
            tag_input: InputField::new(),
            tags: vec!["Urgente".to_string(), "Marketing".to_string()],
            tag_cursor: 0,
            priority: 1, // Média
            priorities: vec![Priority::Alta, Priority::Media, Priority::Baixa],
            current_field: TITLE_FIELD,
            errors: FormErrors::default(),
        };
        form.update_active_field();
        form
    }

    /// Get mutable references to all input fields in visual order.
    pub fn fields_mut(&mut self) -> Vec<&mut InputField> {
        vec![
            &mut self.title,       // 0 - TITLE_FIELD
            &mut self.description, // 1 - DESCRIPTION_FIELD
            &mut self.sector,      // 2 - SECTOR_FIELD
            &mut self.assignee,    // 3 - ASSIGNEE_FIELD
            &mut self.due_date,    // 4 - DUE_FIELD
            // PRIORITY_FIELD at 5 is a selector, not in fields_mut()
            &mut self.tag_input,   // 5 in fields_mut, TAGS_FIELD (6) in navigation
        ]
    }

    /// Get the total number of fields (input fields plus the selector).
    pub fn field_count(&self) -> usize {
        7
    }

    /// Move to the next field in the form.
    pub fn next_field(&mut self) {
        self.current_field = (self.current_field + 1) % self.field_count();
        self.update_active_field();
    }

    /// Move to the previous field in the form.
    pub fn prev_field(&mut self) {
        self.current_field = if self.current_field == 0 {
            self.field_count() - 1
        } else {
            self.current_field - 1
        };
        self.update_active_field();
    }

    /// Update which field is currently active for editing.
    pub fn update_active_field(&mut self) {
        for field in self.fields_mut() {
            field.active = false;
        }

        match self.current_field {
            TITLE_FIELD => self.title.active = true,
            DESCRIPTION_FIELD => self.description.active = true,
            SECTOR_FIELD => self.sector.active = true,
            ASSIGNEE_FIELD => self.assignee.active = true,
            DUE_FIELD => self.due_date.active = true,
            PRIORITY_FIELD => {} // priority selector
            TAGS_FIELD => self.tag_input.active = true,
            _ => {}
        }
    }

    /// Handle character input for the currently active field.
    pub fn handle_char(&mut self, c: char) {
        match self.current_field {
            TITLE_FIELD => self.title.handle_char(c),
            DESCRIPTION_FIELD => self.description.handle_char(c),
            SECTOR_FIELD => self.sector.handle_char(c),
            ASSIGNEE_FIELD => self.assignee.handle_char(c),
            DUE_FIELD => self.due_date.handle_char(c),
            TAGS_FIELD => self.tag_input.handle_char(c),
            _ => {}
        }
    }

    /// Handle backspace for the currently active field. On the tags field
    /// with an empty buffer this removes the highlighted chip instead.
    pub fn handle_backspace(&mut self) {
        match self.current_field {
            TITLE_FIELD => self.title.handle_backspace(),
            DESCRIPTION_FIELD => self.description.handle_backspace(),
            SECTOR_FIELD => self.sector.handle_backspace(),
            ASSIGNEE_FIELD => self.assignee.handle_backspace(),
            DUE_FIELD => self.due_date.handle_backspace(),
            TAGS_FIELD => {
                if self.tag_input.is_empty() {
                    self.remove_selected_tag();
                } else {
                    self.tag_input.handle_backspace();
                }
            }
            _ => {}
        }
    }

    /// Handle delete for the currently active field, with the same chip
    /// behaviour as backspace on the tags field.
    pub fn handle_delete(&mut self) {
        match self.current_field {
            TITLE_FIELD => self.title.handle_delete(),
            DESCRIPTION_FIELD => self.description.handle_delete(),
            SECTOR_FIELD => self.sector.handle_delete(),
            ASSIGNEE_FIELD => self.assignee.handle_delete(),
            DUE_FIELD => self.due_date.handle_delete(),
            TAGS_FIELD => {
                if self.tag_input.is_empty() {
                    self.remove_selected_tag();
                } else {
                    self.tag_input.handle_delete();
                }
            }
            _ => {}
        }
    }

    /// Handle left/right arrow keys: cursor movement on text fields,
    /// cycling on the priority selector, chip selection on the tags field
    /// while its buffer is empty.
    pub fn handle_left_right(&mut self, right: bool) {
        match self.current_field {
            TITLE_FIELD => {
                if right {
                    self.title.move_cursor_right()
                } else {
                    self.title.move_cursor_left()
                }
            }
            DESCRIPTION_FIELD => {
                if right {
                    self.description.move_cursor_right()
                } else {
                    self.description.move_cursor_left()
                }
            }
            SECTOR_FIELD => {
                if right {
                    self.sector.move_cursor_right()
                } else {
                    self.sector.move_cursor_left()
                }
            }
            ASSIGNEE_FIELD => {
                if right {
                    self.assignee.move_cursor_right()
                } else {
                    self.assignee.move_cursor_left()
                }
            }
            DUE_FIELD => {
                if right {
                    self.due_date.move_cursor_right()
                } else {
                    self.due_date.move_cursor_left()
                }
            }
            PRIORITY_FIELD => {
                if right {
                    self.priority = (self.priority + 1) % self.priorities.len();
                } else {
                    self.priority = if self.priority == 0 {
                        self.priorities.len() - 1
                    } else {
                        self.priority - 1
                    };
                }
            }
            TAGS_FIELD => {
                if self.tag_input.is_empty() {
                    if right {
                        if self.tag_cursor + 1 < self.tags.len() {
                            self.tag_cursor += 1;
                        }
                    } else if self.tag_cursor > 0 {
                        self.tag_cursor -= 1;
                    }
                } else if right {
                    self.tag_input.move_cursor_right()
                } else {
                    self.tag_input.move_cursor_left()
                }
            }
            _ => {}
        }
    }

    /// Commit the pending tag: trimmed, appended when non-empty, buffer
    /// cleared afterwards. A blank buffer is a no-op. Duplicates are
    /// allowed; tags are free-form labels.
    pub fn commit_tag(&mut self) {
        let tag = self.tag_input.value.trim();
        if !tag.is_empty() {
            self.tags.push(tag.to_string());
            self.tag_input.clear();
        }
    }

    /// Remove the tag at `index`. Out-of-range indexes are ignored.
    pub fn remove_tag(&mut self, index: usize) {
        if index < self.tags.len() {
            self.tags.remove(index);
        }
        if self.tags.is_empty() {
            self.tag_cursor = 0;
        } else if self.tag_cursor >= self.tags.len() {
            self.tag_cursor = self.tags.len() - 1;
        }
    }

    /// Remove the chip under the selection cursor, if any.
    fn remove_selected_tag(&mut self) {
        if !self.tags.is_empty() {
            self.remove_tag(self.tag_cursor);
        }
    }

    /// Get the currently selected priority.
    pub fn selected_priority(&self) -> Priority {
        self.priorities[self.priority]
    }

    /// Run the required-field checks, recording one message per missing
    /// field. Returns true when the form may be submitted.
    pub fn validate(&mut self) -> bool {
        self.errors = FormErrors::default();
        if self.title.is_empty() {
            self.errors.title = Some("Este campo é obrigatório");
        }
        if self.sector.is_empty() {
            self.errors.sector = Some("Selecione um setor");
        }
        if self.assignee.is_empty() {
            self.errors.assignee = Some("Selecione um responsável");
        }
        if self.due_date.is_empty() {
            self.errors.due_date = Some("Data é obrigatória");
        }
        !self.errors.any()
    }

    /// Build the final record from the form.
    ///
    /// New tasks always start as To Do regardless of anything on screen,
    /// and the sector is stored upper-cased. Every other field is taken
    /// verbatim. Callers validate first; `id` comes from the store.
    pub fn build_task(&self, id: u64) -> Task {
        Task {
            id,
            title: self.title.value.clone(),
            description: self.description.value.clone(),
            priority: self.selected_priority(),
            status: Status::Todo,
            sector: self.sector.value.to_uppercase(),
            assignee: self.assignee.value.clone(),
            due_date: self.due_date.value.clone(),
            tags: self.tags.clone(),
        }
    }
}
