
#[cfg(test)]
mod controllable_tests;

#[cfg(test)]
mod checkbox_tests;


#[cfg(test)]
mod slider_tests;

#[cfg(test)]
mod progress_tests;

#[cfg(test)]
mod presentation_tests;

#[cfg(test)]
mod theme_tests;
