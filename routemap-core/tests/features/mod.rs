//! This module contains feature tests: they run the whole map initialization against a fake provider.
