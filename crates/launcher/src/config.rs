/// Everything the launcher needs to know about what it starts and how it talks to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    /// Name shown in dialog titles and messages.
    pub app_name: String,
    /// File name of the companion script, looked up next to the executable.
    pub script_name: String,
    /// Interpreter binary, resolved through the usual `PATH` search.
    pub interpreter: String,
    /// Flags passed to the interpreter before the script.
    pub flags: Vec<String>,
    /// Flag that introduces the script path.
    pub script_flag: String,
    /// Suppress the child's console window.
    pub hide_window: bool,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            app_name: String::from("AI Hub"),
            script_name: String::from("Main.ps1"),
            interpreter: String::from("powershell.exe"),
            flags: [
                "-ExecutionPolicy",
                "Bypass",
                "-NoProfile",
                "-WindowStyle",
                "Hidden",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            script_flag: String::from("-File"),
            hide_window: true,
        }
    }
}

impl LauncherConfig {
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    pub fn with_script_name(mut self, script_name: impl Into<String>) -> Self {
        self.script_name = script_name.into();
        self
    }

    pub fn with_interpreter(mut self, interpreter: impl Into<String>) -> Self {
        self.interpreter = interpreter.into();
        self
    }

    pub fn with_flags<T: Into<String>, I: IntoIterator<Item = T>>(mut self, flags: I) -> Self {
        self.flags = flags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_hide_window(mut self, hide_window: bool) -> Self {
        self.hide_window = hide_window;
        self
    }

    pub fn error_title(&self) -> String {
        format!("{} - Error", self.app_name)
    }

    pub fn critical_error_title(&self) -> String {
        format!("{} - Critical Error", self.app_name)
    }
}
