/*
 * Copyright (c) 2003-2025. Trevor Campbell and others.
 *
 * This file is part of Kelpie Night Time Calculator.
 *
 * Kelpie Night Time Calculator is free software; you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation; either version 2 of the License, or
 * (at your option) any later version.
 *
 * Kelpie Night Time Calculator is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with Kelpie Night Time Calculator; if not, write to the Free Software
 * Foundation, Inc., 59 Temple Place, Suite 330, Boston, MA  02111-1307  USA
 *
 * Contributors:
 *      Trevor Campbell
 *
 */

pub const PROGRAM_NAME: &str = "Kelpie Night Time Calculator";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const LOG_FILE: &str = "night-time-calculator.log";
pub const ABOUT: &str = "Estimate the night flying time of a flight from its departure and arrival";
