//! Reply texts sent back to the user.
//!
//! The literals are part of the bot's external surface and must not change;
//! case-folding never leaks into them.

use crate::namelist::LookupResult;

/// Reply when the query is on the list.
pub const FOUND: &str = "ESTAFADORA";

/// Reply when the query is not on the list and nothing is similar.
pub const NOT_FOUND: &str = "NO SE ENCUENTRA EN LA LISTA";

/// Prefix for the reply carrying suggestions.
pub const SUGGESTIONS_HEADER: &str = "NO SE ENCUENTRA EN LA LISTA.\n\nQuizás quisiste decir:\n";

/// Static instructions shown for the start/help command.
pub const WELCOME: &str = "¡Hola! Soy tu bot de verificación de usuarios y nombres de webcams estafadoras.\n\n\
    Para usarme, simplemente escribe un nombre o usuario (sin @) y yo te diré si se encuentra en mi lista de nombres de 'ESTAFADORAS'.\n\n\
    Si el nombre no está en la lista pero tiene al menos 3 caracteres, te mostraré sugerencias de nombres similares.";

/// Render a lookup outcome as the single text reply.
pub fn render(result: &LookupResult) -> String {
    match result {
        LookupResult::Match => FOUND.to_string(),
        LookupResult::NotFound => NOT_FOUND.to_string(),
        LookupResult::Suggestions(suggestions) => {
            format!("{}{}", SUGGESTIONS_HEADER, suggestions.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_renders_the_found_literal() {
        assert_eq!(render(&LookupResult::Match), "ESTAFADORA");
    }

    #[test]
    fn not_found_renders_the_miss_literal() {
        assert_eq!(render(&LookupResult::NotFound), "NO SE ENCUENTRA EN LA LISTA");
    }

    #[test]
    fn suggestions_are_joined_in_order() {
        let result = LookupResult::Suggestions(vec![
            "Maria".to_string(),
            "Mariana".to_string(),
        ]);
        assert_eq!(
            render(&result),
            "NO SE ENCUENTRA EN LA LISTA.\n\nQuizás quisiste decir:\nMaria\nMariana"
        );
    }
}
