pub mod predict_panel;
