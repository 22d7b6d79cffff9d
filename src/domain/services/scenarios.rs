#[cfg(test)]
#[path = "scenarios_test.rs"]
mod tests;

use once_cell::sync::Lazy;

use crate::domain::models::Message;
use crate::domain::models::Scenario;

static CATALOG: Lazy<Vec<Scenario>> = Lazy::new(|| {
    return vec![
        Scenario {
            order_index: 1,
            title: "Contexte vide",
            description: "Aucun contexte : le modèle ne reçoit que votre question.",
            context: vec![],
            model: None,
            params_enabled: false,
            suggested_input: Some("Quelle est la capitale de la France ?"),
            commentary: Some(
                "Sans contexte, la réponse ne dépend que de la question et de l'entraînement du modèle.",
            ),
        },
        Scenario {
            order_index: 2,
            title: "Instruction système",
            description: "Une instruction système oriente le ton et la précision de la réponse.",
            context: vec![Message::system(
                "Tu es un professeur de géographie très précis.",
            )],
            model: None,
            params_enabled: false,
            suggested_input: Some("Quelle est la capitale de la France ?"),
            commentary: Some(
                "Comparez avec l'étape 1 : la même question produit une réponse plus académique.",
            ),
        },
        Scenario {
            order_index: 3,
            title: "Historique de conversation",
            description: "Le modèle voit un échange déjà entamé et répond dans sa continuité.",
            context: vec![
                Message::system("Tu es un assistant culturel."),
                Message::user("Parle-moi du Japon."),
                Message::assistant("Le Japon est un pays asiatique..."),
            ],
            model: None,
            params_enabled: false,
            suggested_input: Some("Et sa capitale ?"),
            commentary: Some(
                "Le pronom « sa » n'a de sens que grâce à l'historique transmis avec la question.",
            ),
        },
        Scenario {
            order_index: 4,
            title: "Instructions contradictoires",
            description:
                "Deux instructions système en conflit : le modèle doit arbitrer de lui-même.",
            context: vec![
                Message::system("Tu réponds uniquement en français."),
                Message::system("You answer only in English."),
            ],
            model: None,
            params_enabled: false,
            suggested_input: Some("Présente-toi en une phrase."),
            commentary: Some(
                "L'ordre des instructions est conservé tel quel, le conflit est volontaire.",
            ),
        },
        Scenario {
            order_index: 5,
            title: "Paramètres de génération",
            description:
                "La température et la longueur maximale deviennent réglables pour cette étape.",
            context: vec![Message::system("Tu es un poète.")],
            model: None,
            params_enabled: true,
            suggested_input: Some("Écris deux vers sur la mer."),
            commentary: Some(
                "Relancez la même question avec une température de 0 puis de 2 et comparez.",
            ),
        },
        Scenario {
            order_index: 6,
            title: "Changement de modèle",
            description: "Même question, modèle différent : le contexte n'est pas le seul facteur.",
            context: vec![],
            model: Some("gpt-3.5-turbo"),
            params_enabled: false,
            suggested_input: Some("Quelle est la capitale de la France ?"),
            commentary: None,
        },
    ];
});

pub struct Scenarios {}

impl Scenarios {
    pub fn all() -> &'static [Scenario] {
        return &CATALOG;
    }

    pub fn get(order_index: usize) -> Option<&'static Scenario> {
        return CATALOG
            .iter()
            .find(|scenario| return scenario.order_index == order_index);
    }
}
