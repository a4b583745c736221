//! Todo Store
//!
//! Pure transition function over the todo sequence. The view owns the
//! sequence in a signal and replaces it wholesale on each action.

use crate::models::Todo;

/// One state transition of the todo list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoAction {
    /// Append a new todo with the given text
    Add(String),
    /// Remove the todo with the given id (no-op when absent)
    Remove(u32),
}

/// Compute the next todo sequence from the current one and an action.
///
/// Pure and synchronous; the input slice is never mutated. Ids are
/// assigned as `len + 1`, which can collide with a surviving id once
/// items have been removed — kept as-is from the original behaviour.
pub fn reduce(state: &[Todo], action: TodoAction) -> Vec<Todo> {
    match action {
        TodoAction::Add(text) => {
            let mut next = state.to_vec();
            next.push(Todo {
                id: state.len() as u32 + 1,
                done: false,
                text,
            });
            next
        }
        TodoAction::Remove(id) => state
            .iter()
            .filter(|todo| todo.id != id)
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: u32, text: &str) -> Todo {
        Todo {
            id,
            done: false,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_add_to_empty() {
        let next = reduce(&[], TodoAction::Add("buy milk".to_string()));
        assert_eq!(next, vec![make_todo(1, "buy milk")]);
    }

    #[test]
    fn test_add_appends_and_preserves_prefix() {
        let state = vec![make_todo(1, "buy milk")];
        let next = reduce(&state, TodoAction::Add("walk dog".to_string()));

        assert_eq!(next.len(), state.len() + 1);
        assert_eq!(next[..state.len()], state[..]);
        let last = next.last().unwrap();
        assert_eq!(last.id, 2);
        assert_eq!(last.text, "walk dog");
        assert!(!last.done);
    }

    #[test]
    fn test_add_does_not_mutate_input() {
        let state = vec![make_todo(1, "a")];
        let _ = reduce(&state, TodoAction::Add("b".to_string()));
        assert_eq!(state, vec![make_todo(1, "a")]);
    }

    #[test]
    fn test_add_empty_text_is_allowed() {
        let next = reduce(&[], TodoAction::Add(String::new()));
        assert_eq!(next, vec![make_todo(1, "")]);
    }

    #[test]
    fn test_remove_keeps_order() {
        let state = vec![make_todo(1, "a"), make_todo(2, "b")];
        let next = reduce(&state, TodoAction::Remove(1));
        assert_eq!(next, vec![make_todo(2, "b")]);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let state = vec![make_todo(1, "a"), make_todo(2, "b")];
        let next = reduce(&state, TodoAction::Remove(99));
        assert_eq!(next, state);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let state = vec![make_todo(1, "a"), make_todo(2, "b"), make_todo(3, "c")];
        let once = reduce(&state, TodoAction::Remove(2));
        let twice = reduce(&once, TodoAction::Remove(2));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_id_collision_after_remove_then_add() {
        // Pins the known quirk of len+1 id assignment: removing from
        // the middle and adding again reuses a live id.
        let state = vec![make_todo(1, "a"), make_todo(2, "b"), make_todo(3, "c")];
        let removed = reduce(&state, TodoAction::Remove(2));
        let next = reduce(&removed, TodoAction::Add("d".to_string()));

        assert_eq!(next.last().unwrap().id, 3);
        assert_eq!(next.iter().filter(|t| t.id == 3).count(), 2);
    }

    #[test]
    fn test_render_keys_stay_unique_when_ids_collide() {
        // The view keys rows by position, not id: after add, add, add,
        // remove(2), add the ids are [1, 3, 3] and would repeat as keys.
        let mut state = Vec::new();
        for text in ["a", "b", "c"] {
            state = reduce(&state, TodoAction::Add(text.to_string()));
        }
        state = reduce(&state, TodoAction::Remove(2));
        state = reduce(&state, TodoAction::Add("d".to_string()));

        let ids: Vec<u32> = state.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3, 3]);

        let keys: Vec<usize> = state.iter().enumerate().map(|(index, _)| index).collect();
        assert_eq!(keys, vec![0, 1, 2]);
    }
}
