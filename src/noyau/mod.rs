//! Noyau calculatrice de poche
//!
//! Organisation interne :
//! - moteur.rs    : machine à états (écran, réserve, opération en attente)
//! - operateur.rs : les quatre opérations + symboles
//! - format.rs    : écriture décimale des résultats + relecture de l’écran

pub mod format;
pub mod moteur;
pub mod operateur;



// API publique minimale
pub use moteur::EtatCalc;
pub use operateur::Operateur;
