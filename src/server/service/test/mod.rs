mod settings;
mod weight;
