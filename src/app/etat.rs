//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter l’état du moteur et traduire les touches (pavé ou clavier
//! physique) en transitions du noyau.
//!
//! Contrats (Loi de Clément, version UI) :
//! - Aucune arithmétique ici (tout passe par le noyau).
//! - Actions déterministes, sans effet de bord caché.

use crate::noyau::{EtatCalc, Operateur};

/// Une touche du pavé (ou son équivalent clavier).
#[derive(Clone, Copy, Debug)]
pub enum Touche {
    Chiffre(u8),
    Point,
    Operation(Operateur),
    Egal,
    Effacer,
}

impl Touche {
    /// Touche correspondant à un caractère tapé au clavier physique.
    ///
    /// ',' est accepté comme point décimal (claviers FR) ; '×' et '÷'
    /// couvrent un éventuel pavé virtuel qui envoie les glyphes du pavé.
    pub fn depuis_char(c: char) -> Option<Touche> {
        match c {
            '0'..='9' => Some(Touche::Chiffre(c as u8 - b'0')),
            '.' | ',' => Some(Touche::Point),
            '+' => Some(Touche::Operation(Operateur::Plus)),
            '-' | '−' => Some(Touche::Operation(Operateur::Moins)),
            '*' | '×' => Some(Touche::Operation(Operateur::Fois)),
            '/' | '÷' => Some(Touche::Operation(Operateur::Division)),
            '=' => Some(Touche::Egal),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    /// La machine à états du noyau ; tout l’état vivant est là.
    pub calc: EtatCalc,
}

impl AppCalc {
    /// Dispatch d’une touche vers le moteur.
    pub fn appuyer(&mut self, touche: Touche) {
        tracing::debug!(?touche, ecran = %self.calc.affichage, "touche");

        match touche {
            Touche::Chiffre(c) => self.calc.saisir_chiffre(c),
            Touche::Point => self.calc.saisir_point(),
            Touche::Operation(op) => self.calc.choisir_operateur(op),
            Touche::Egal => self.calc.egal(),
            Touche::Effacer => self.calc.effacer(),
        }
    }

    /// AC : remise à zéro totale (aussi branché sur Échap).
    pub fn reset_total(&mut self) {
        self.appuyer(Touche::Effacer);
    }
}
