// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran : indicateur d’opération en attente + valeur courante (alignés à droite)
// - Pavé : grille 4 colonnes, gros boutons (tactile ok)
// - Clavier physique : chiffres / point / opérateurs via événements texte,
//   Enter = "=" (Échap est géré en global dans app.rs)

use eframe::egui;

use super::etat::{AppCalc, Touche};
use crate::noyau::Operateur;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice de poche");
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);

        self.ui_pave(ui);

        // Après les widgets : aucun champ texte ne consomme les frappes,
        // on peut donc lire les événements clavier de la frame.
        self.clavier(ui);
    }

    /* ------------------------ Écran ------------------------ */

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // Ligne secondaire : "réserve opérateur" ("12 +"),
                    // espace insécable sinon pour garder la hauteur stable.
                    match self.calc.indicateur() {
                        Some(ind) => ui.weak(ind),
                        None => ui.weak("\u{00a0}"),
                    };

                    ui.label(
                        egui::RichText::new(&self.calc.affichage)
                            .monospace()
                            .size(32.0),
                    );
                });
            });
    }

    /* ------------------------ Pavé ------------------------ */

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "AC", "Remise à zéro totale", Touche::Effacer);
                ui.label("");
                self.bouton(ui, "÷", "Division", Touche::Operation(Operateur::Division));
                self.bouton(ui, "×", "Multiplication", Touche::Operation(Operateur::Fois));
                ui.end_row();

                self.bouton_chiffre(ui, 7);
                self.bouton_chiffre(ui, 8);
                self.bouton_chiffre(ui, 9);
                self.bouton(ui, "−", "Soustraction", Touche::Operation(Operateur::Moins));
                ui.end_row();

                self.bouton_chiffre(ui, 4);
                self.bouton_chiffre(ui, 5);
                self.bouton_chiffre(ui, 6);
                self.bouton(ui, "+", "Addition", Touche::Operation(Operateur::Plus));
                ui.end_row();

                self.bouton_chiffre(ui, 1);
                self.bouton_chiffre(ui, 2);
                self.bouton_chiffre(ui, 3);
                self.bouton(ui, "=", "Résout l’opération en attente", Touche::Egal);
                ui.end_row();

                self.bouton_chiffre(ui, 0);
                ui.label("");
                self.bouton(ui, ".", "Point décimal", Touche::Point);
                ui.label("");
                ui.end_row();
            });
    }

    fn bouton_chiffre(&mut self, ui: &mut egui::Ui, chiffre: u8) {
        let label = char::from(b'0' + chiffre).to_string();
        self.bouton(ui, &label, "", Touche::Chiffre(chiffre));
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, touche: Touche) {
        let mut resp = ui.add_sized(
            [56.0, 40.0],
            egui::Button::new(egui::RichText::new(label).size(18.0)),
        );
        if !tip.is_empty() {
            resp = resp.on_hover_text(tip);
        }

        if resp.clicked() {
            self.appuyer(touche);
        }
    }

    /* ------------------------ Clavier physique ------------------------ */

    /// Traduit les frappes de la frame en touches du pavé.
    /// Enter vaut "=" ; le reste passe par Touche::depuis_char.
    fn clavier(&mut self, ui: &mut egui::Ui) {
        let mut touches: Vec<Touche> = Vec::new();

        ui.input(|i| {
            for ev in &i.events {
                if let egui::Event::Text(texte) = ev {
                    for c in texte.chars() {
                        if let Some(t) = Touche::depuis_char(c) {
                            touches.push(t);
                        }
                    }
                }
            }
            if i.key_pressed(egui::Key::Enter) {
                touches.push(Touche::Egal);
            }
        });

        for t in touches {
            self.appuyer(t);
        }
    }
}
