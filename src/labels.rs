//! User-facing strings (French UI)

pub const APP_TITLE: &str = "Gestionnaire de Contacts";

pub const NEW_CONTACT: &str = "Nouveau contact";
pub const EDIT_CONTACT: &str = "Modifier le contact";
pub const COLLAPSE_ALL: &str = "Tout réduire";
pub const SEARCH_PLACEHOLDER: &str = "Rechercher un contact...";
pub const SAVE: &str = "Enregistrer";
pub const CANCEL: &str = "Annuler";

pub const EMPTY_TITLE: &str = "Aucun contact";
pub const EMPTY_HINT: &str = "Commencez par créer votre premier contact";

pub const STAT_CONTACTS: &str = "Contacts";
pub const STAT_OPPORTUNITIES: &str = "Opportunités";
pub const STAT_TOTAL_VALUE: &str = "Valeur totale";

pub const VIEW_FULL: &str = "Vue complète";
pub const VIEW_SUMMARY: &str = "Vue résumée";
pub const EDIT: &str = "Modifier";
pub const DELETE: &str = "Supprimer";

pub const FIELD_NAME: &str = "Nom *";
pub const FIELD_EMAIL: &str = "Email";
pub const FIELD_COMPANY: &str = "Entreprise";
pub const FIELD_POSITION: &str = "Poste";

pub const LIST_EVENTS: &str = "Événements";
pub const LIST_NOTES: &str = "Notes importantes";
pub const LIST_ACTIONS: &str = "Prochaines actions";
pub const LIST_OPPORTUNITIES: &str = "Opportunités";
pub const ADD_EVENT: &str = "+ Ajouter un événement";
pub const ADD_NOTE: &str = "+ Ajouter une note";
pub const ADD_ACTION: &str = "+ Ajouter une action";
pub const ADD_OPPORTUNITY: &str = "+ Ajouter une opportunité";
pub const REMOVE_ROW: &str = "✕";

pub const PLACEHOLDER_DATE: &str = "Date";
pub const PLACEHOLDER_TYPE: &str = "Type";
pub const PLACEHOLDER_NOTES: &str = "Notes";
pub const PLACEHOLDER_NOTE: &str = "Note importante";
pub const PLACEHOLDER_ACTION: &str = "Action";
pub const PLACEHOLDER_DUE_DATE: &str = "Date échéance";
pub const PLACEHOLDER_PROJECT: &str = "Projet";
pub const PLACEHOLDER_VALUE: &str = "Valeur (€)";

pub const SECTION_EVENTS: &str = "📅 Derniers événements";
pub const SECTION_NOTES: &str = "📝 Notes importantes";
pub const SECTION_ACTIONS: &str = "✅ Prochaines actions";
pub const SECTION_OPPORTUNITIES: &str = "💰 Opportunités";

pub const CONTACT_CREATED: &str = "Contact créé avec succès";
pub const CONTACT_UPDATED: &str = "Contact modifié avec succès";
pub const CONTACT_DELETED: &str = "Contact supprimé avec succès";
pub const CONFIRM_DELETE: &str = "Êtes-vous sûr de vouloir supprimer ce contact ?";

pub const LOAD_CONTACTS_FAILED: &str = "Erreur lors du chargement des contacts";
pub const LOAD_CONTACT_FAILED: &str = "Erreur lors du chargement du contact";
pub const SAVE_FAILED: &str = "Erreur lors de la sauvegarde du contact";
pub const DELETE_FAILED: &str = "Erreur lors de la suppression du contact";

/// Grammatical gender of a section title, for the hidden-count badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Masculine,
    Feminine,
}

/// Badge shown on a collapsed section, e.g. `(3+ masqués)`
pub fn hidden_badge(hidden: usize, gender: Gender) -> String {
    match gender {
        Gender::Masculine => format!("({}+ masqués)", hidden),
        Gender::Feminine => format!("({}+ masquées)", hidden),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_badge() {
        assert_eq!(hidden_badge(3, Gender::Masculine), "(3+ masqués)");
        assert_eq!(hidden_badge(1, Gender::Feminine), "(1+ masquées)");
    }
}
