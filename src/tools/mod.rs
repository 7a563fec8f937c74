// sbcbuild-rs: SBC Platform Build Configurator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! External tool wrappers.
//!
//! ```text
//! Platform --> DependencyProbe --> ProcessBuilder --> pkg-config
//! ```

pub mod pkgconfig;
