//! Interactive loop: paint, pick an action, dispatch, repeat

use anyhow::{Context, Result};
use colored::Colorize;
use dialoguer::{Input, Select};

use productos::{
    Command, Effect, FormField, ProductApi, ProductListController, RemoveOutcome, ScreenView,
    SubmitOutcome, UserPrompt,
};

use crate::screen;

/// Entries of the action menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    EditField(FormField),
    Submit,
    CancelEdit,
    EditRow,
    DeleteRow,
    Refresh,
    Quit,
}

impl MenuAction {
    fn label(&self, view: &ScreenView) -> String {
        match self {
            MenuAction::EditField(field) => format!("Set {}", field.label().to_lowercase()),
            MenuAction::Submit => view.submit_label.to_string(),
            MenuAction::CancelEdit => "Cancel edit".to_string(),
            MenuAction::EditRow => "Edit a product".to_string(),
            MenuAction::DeleteRow => "Delete a product".to_string(),
            MenuAction::Refresh => "Refresh list".to_string(),
            MenuAction::Quit => "Quit".to_string(),
        }
    }
}

/// Actions available for the current screen
pub fn menu(view: &ScreenView) -> Vec<MenuAction> {
    let mut actions: Vec<MenuAction> = FormField::ALL
        .iter()
        .map(|&field| MenuAction::EditField(field))
        .collect();

    actions.push(MenuAction::Submit);
    if view.show_cancel {
        actions.push(MenuAction::CancelEdit);
    }
    if !view.rows.is_empty() {
        actions.push(MenuAction::EditRow);
        actions.push(MenuAction::DeleteRow);
    }
    actions.push(MenuAction::Refresh);
    actions.push(MenuAction::Quit);

    actions
}

/// Status line for a finished command, if it has one worth showing
pub fn status_line(effect: Effect) -> Option<String> {
    match effect {
        Effect::Submitted(SubmitOutcome::Created) => Some(format!("{} Product created", "✓".green())),
        Effect::Submitted(SubmitOutcome::Updated) => Some(format!("{} Product updated", "✓".green())),
        Effect::Removed(RemoveOutcome::Deleted) => Some(format!("{} Product deleted", "✓".green())),
        Effect::Removed(RemoveOutcome::Declined) => Some("Delete cancelled".dimmed().to_string()),
        _ => None,
    }
}

/// Run the products screen until the user quits
pub async fn run<A, P>(controller: &mut ProductListController<A, P>) -> Result<()>
where
    A: ProductApi,
    P: UserPrompt,
{
    controller.start().await;

    loop {
        let view = ScreenView::from_state(controller.state());
        println!("\n{}", screen::paint(&view));

        let actions = menu(&view);
        let labels: Vec<String> = actions.iter().map(|a| a.label(&view)).collect();
        let choice = Select::new()
            .with_prompt("Action")
            .items(&labels)
            .default(0)
            .interact()
            .context("Failed to read menu choice")?;

        let command = match actions[choice] {
            MenuAction::Quit => break,
            MenuAction::EditField(field) => {
                let current = controller.state().form.get(field).to_string();
                let value: String = Input::new()
                    .with_prompt(field.label())
                    .with_initial_text(current)
                    .allow_empty(true)
                    .interact_text()
                    .context("Failed to read input")?;
                Command::UpdateField { field, value }
            }
            MenuAction::Submit => Command::Submit,
            MenuAction::CancelEdit => Command::ResetForm,
            MenuAction::Refresh => Command::Refresh,
            MenuAction::EditRow => match pick_row(&view, "Edit which product?")? {
                Some(index) => Command::SelectForEdit(controller.state().products[index].clone()),
                None => continue,
            },
            MenuAction::DeleteRow => {
                let id = pick_row(&view, "Delete which product?")?
                    .and_then(|index| view.rows[index].id.clone());
                match id {
                    Some(id) => Command::Remove(id),
                    None => continue,
                }
            }
        };

        tracing::debug!(?command, "dispatching");
        if let Some(line) = status_line(controller.dispatch(command).await) {
            println!("{}", line);
        }
    }

    Ok(())
}

fn pick_row(view: &ScreenView, prompt: &str) -> Result<Option<usize>> {
    let labels: Vec<String> = view
        .rows
        .iter()
        .map(|r| format!("#{} {} ({})", r.id_text, r.name, r.price))
        .collect();

    Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact_opt()
        .context("Failed to read product choice")
}

#[cfg(test)]
mod tests {
    use super::*;
    use productos::{ControllerState, FormState, Product};

    #[test]
    fn test_menu_without_products_or_edit() {
        let view = ScreenView::from_state(&ControllerState::default());
        let actions = menu(&view);

        assert_eq!(actions.len(), 7);
        assert_eq!(actions[4], MenuAction::Submit);
        assert!(!actions.contains(&MenuAction::CancelEdit));
        assert!(!actions.contains(&MenuAction::DeleteRow));
        assert_eq!(actions.last(), Some(&MenuAction::Quit));
        assert_eq!(MenuAction::Submit.label(&view), "Create product");
    }

    #[test]
    fn test_menu_while_editing_listed_product() {
        let product = Product::new("Widget", "9.99").with_id(1);
        let view = ScreenView::from_state(&ControllerState {
            products: vec![product.clone()],
            form: FormState::from_product(&product),
            ..Default::default()
        });
        let actions = menu(&view);

        assert!(actions.contains(&MenuAction::CancelEdit));
        assert!(actions.contains(&MenuAction::EditRow));
        assert!(actions.contains(&MenuAction::DeleteRow));
        assert_eq!(MenuAction::Submit.label(&view), "Save changes");
    }

    #[test]
    fn test_status_lines() {
        colored::control::set_override(false);

        assert_eq!(
            status_line(Effect::Submitted(SubmitOutcome::Created)).as_deref(),
            Some("✓ Product created")
        );
        assert_eq!(status_line(Effect::Submitted(SubmitOutcome::Invalid)), None);
        assert_eq!(status_line(Effect::Removed(RemoveOutcome::Failed)), None);
        assert_eq!(status_line(Effect::None), None);
    }
}
