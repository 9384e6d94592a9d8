//! Human-readable texts shown by the test window.

/// Instruction shown before the first trial.
pub const WELCOME: &str = "Добро пожаловать! Нажмите кнопку ниже, чтобы начать тест.";

/// Instruction shown once every trial is done.
pub const FINISHED: &str = "✅ Тест завершён!";

/// Instruction for trial `number` with the given target path.
pub fn trial_instruction(number: u32, target: &str) -> String {
    format!("Попытка {number}: выберите \"{target}\"")
}

/// Append-only log of everything that happened in a session.
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    text: String,
}

impl Transcript {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn trial_started(&mut self, instruction: &str) {
        self.text.push_str(&format!("\n🔔 {instruction}\n"));
    }

    pub fn correct_selection(&mut self, path: &str, actual_ms: u64, predicted_ms: f64) {
        self.text.push_str(&format!(
            "✅ Вы выбрали: {path}\n⏱ Реакция: {actual_ms} мс\n📊 По Хику: {predicted_ms:.2} мс\n"
        ));
    }

    pub fn wrong_selection(&mut self, clicked: &str) {
        self.text
            .push_str(&format!("⚠️ Неверный выбор: \"{clicked}\"\n"));
    }

    pub fn finished(&mut self, trials: u32) {
        self.text
            .push_str(&format!("\n🎉 Все {trials} попыток завершены!\n"));
    }
}
