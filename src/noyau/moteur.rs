//! src/noyau/moteur.rs
//!
//! Machine à états de la calculatrice (sans vue).
//!
//! Rôle : porter l’état affiché (écran, opérande en réserve, opération en
//! attente, drapeau de nouvelle saisie) et offrir les cinq transitions que
//! le pavé déclenche : chiffre, point, effacer, opération, égal.
//!
//! Contrats (Loi de Clément, version machine) :
//! - Transitions déterministes, sans effet de bord caché.
//! - Écran toujours non vide et relisible (lire_nombre).
//! - Opération en attente => opérande en réserve présente.
//! - Écran illisible (théoriquement impossible) : la transition ne touche
//!   à rien plutôt que de paniquer.

use super::format::{format_resultat, lire_nombre};
use super::operateur::Operateur;

/// Garde-fou : chiffres saisissables à l’écran (anti-abus ; au-delà de la
/// précision d’un f64, la saisie n’apporte plus rien).
pub const CHIFFRES_MAX: usize = 15;

#[derive(Clone, Debug, PartialEq)]
pub struct EtatCalc {
    /// Valeur affichée à l’écran ("0" au départ).
    pub affichage: String,

    /// Opérande gauche en réserve, en attente de la seconde.
    pub operande_prec: Option<f64>,

    /// Opération choisie, en attente de la seconde opérande.
    pub operateur: Option<Operateur>,

    /// Vrai juste après une opération ou "=" : le prochain chiffre
    /// démarre un nouveau nombre au lieu d’allonger l’écran.
    pub attend_operande: bool,
}

impl Default for EtatCalc {
    fn default() -> Self {
        Self {
            affichage: "0".to_string(),
            operande_prec: None,
            operateur: None,
            attend_operande: false,
        }
    }
}

impl EtatCalc {
    /* ------------------------ Saisie ------------------------ */

    /// Chiffre 0..=9 (toute autre valeur est ignorée — défense en profondeur).
    pub fn saisir_chiffre(&mut self, chiffre: u8) {
        if chiffre > 9 {
            return;
        }
        let c = char::from(b'0' + chiffre);

        if self.attend_operande {
            self.affichage.clear();
            self.affichage.push(c);
            self.attend_operande = false;
            return;
        }

        if self.affichage == "0" {
            self.affichage.clear();
            self.affichage.push(c);
            return;
        }

        // garde-fou : saisie bornée (les résultats calculés, eux, ne le sont pas)
        if nb_chiffres(&self.affichage) >= CHIFFRES_MAX {
            return;
        }
        self.affichage.push(c);
    }

    /// Point décimal. Sans effet si l’écran en contient déjà un.
    pub fn saisir_point(&mut self) {
        if self.attend_operande {
            self.affichage.clear();
            self.affichage.push_str("0.");
            self.attend_operande = false;
        } else if !self.affichage.contains('.') {
            self.affichage.push('.');
        }
    }

    /* ------------------------ Actions ------------------------ */

    /// AC : retour à l’état initial exact. Idempotent.
    pub fn effacer(&mut self) {
        *self = Self::default();
    }

    /// Choix d’une opération (+ − × ÷).
    ///
    /// - Pas d’opérande en réserve : l’écran part en réserve.
    /// - Opération déjà en attente : on la résout d’abord (enchaînement
    ///   "2 + 3 ×"), l’écran montre le résultat arrondi, la réserve garde
    ///   le résultat non arrondi.
    /// - Dans tous les cas : l’opération devient `op` et le prochain
    ///   chiffre démarre un nouveau nombre.
    pub fn choisir_operateur(&mut self, op: Operateur) {
        let Some(valeur) = lire_nombre(&self.affichage) else {
            return; // écran illisible : on ne touche à rien
        };

        match (self.operande_prec, self.operateur) {
            (None, _) => self.operande_prec = Some(valeur),
            (Some(prec), Some(en_attente)) => {
                let resultat = en_attente.appliquer(prec, valeur);
                self.affichage = format_resultat(resultat);
                self.operande_prec = Some(resultat);
            }
            // réserve sans opération : impossible par construction,
            // on garde la réserve telle quelle
            (Some(_), None) => {}
        }

        self.operateur = Some(op);
        self.attend_operande = true;
    }

    /// "=" : résout l’opération en attente, sinon sans effet.
    pub fn egal(&mut self) {
        let (Some(prec), Some(op)) = (self.operande_prec, self.operateur) else {
            return;
        };
        let Some(valeur) = lire_nombre(&self.affichage) else {
            return; // écran illisible : on ne touche à rien
        };

        let resultat = op.appliquer(prec, valeur);
        self.affichage = format_resultat(resultat);
        self.operande_prec = None;
        self.operateur = None;
        self.attend_operande = true;
    }

    /* ------------------------ Lecture (pour la vue) ------------------------ */

    /// Ligne secondaire de l’écran : "réserve symbole" ("12 +") quand une
    /// opération est en attente.
    pub fn indicateur(&self) -> Option<String> {
        let op = self.operateur?;
        let prec = self.operande_prec?;
        Some(format!("{} {}", format_resultat(prec), op))
    }
}

fn nb_chiffres(s: &str) -> usize {
    s.chars().filter(|c| c.is_ascii_digit()).count()
}
