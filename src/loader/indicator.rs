/// A visual "loading" state that can be switched on and off
pub trait LoadingIndicator {
    fn show_loading(&mut self);
    fn hide_loading(&mut self);
}

/// Shows an indicator on creation and hides it when dropped
pub struct LoadingGuard<'a, I: LoadingIndicator + ?Sized> {
    indicator: &'a mut I,
}

impl<'a, I: LoadingIndicator + ?Sized> LoadingGuard<'a, I> {
    pub fn new(indicator: &'a mut I) -> Self {
        indicator.show_loading();
        Self { indicator }
    }
}

impl<I: LoadingIndicator + ?Sized> Drop for LoadingGuard<'_, I> {
    fn drop(&mut self) {
        self.indicator.hide_loading();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Flag(bool);

    impl LoadingIndicator for Flag {
        fn show_loading(&mut self) {
            self.0 = true;
        }

        fn hide_loading(&mut self) {
            self.0 = false;
        }
    }

    fn fails_early(flag: &mut Flag) -> Result<(), String> {
        let _guard = LoadingGuard::new(flag);
        Err::<(), _>("boom".to_string())?;
        Ok(())
    }

    #[test]
    fn test_guard_hides_on_early_return() {
        let mut flag = Flag(false);
        assert!(fails_early(&mut flag).is_err());
        assert!(!flag.0);
    }

    #[test]
    fn test_guard_shows_while_alive() {
        let mut flag = Flag(false);
        {
            let guard = LoadingGuard::new(&mut flag);
            assert!(guard.indicator.0);
        }
        assert!(!flag.0);
    }
}
